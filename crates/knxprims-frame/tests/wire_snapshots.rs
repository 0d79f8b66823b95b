//! Byte-level snapshots of every connection-lifecycle frame body.

use insta::assert_snapshot;
use knxprims_frame::{
    ConnReq, ConnRes, ConnResStatus, ConnState, ConnStateReq, ConnStateRes, DiscReq, DiscRes,
    HostInfo, Message, TunnelLayer,
};

fn frame_to_hex<M: Message>(message: &M) -> String {
    let mut buf = Vec::new();
    let written = message.write_to(&mut buf).expect("encoding should succeed");
    assert_eq!(written, M::WIRE_SIZE);
    hex::encode(&buf)
}

fn gateway() -> HostInfo {
    HostInfo::udp("192.168.1.10:3671".parse().unwrap())
}

fn client() -> HostInfo {
    HostInfo::udp("192.168.1.20:50100".parse().unwrap())
}

#[test]
fn snapshot_conn_req_data_link() {
    let req = ConnReq::new(client(), client(), TunnelLayer::DATA);
    assert_snapshot!(frame_to_hex(&req), @"0801c0a80114c3b40801c0a80114c3b404040200");
}

#[test]
fn snapshot_conn_req_busmon_nat() {
    let req = ConnReq::new(HostInfo::UNSPECIFIED, HostInfo::UNSPECIFIED, TunnelLayer::BUSMON);
    assert_snapshot!(frame_to_hex(&req), @"0801000000000000080100000000000004048000");
}

#[test]
fn snapshot_conn_res() {
    let res = ConnRes {
        channel: 0x11,
        status: ConnResStatus::OK,
        control: gateway(),
    };
    assert_snapshot!(frame_to_hex(&res), @"11000801c0a8010a0e57");
}

#[test]
fn snapshot_conn_state_req() {
    let req = ConnStateReq {
        channel: 0x11,
        status: 0x00,
        control: client(),
    };
    assert_snapshot!(frame_to_hex(&req), @"11000801c0a80114c3b4");
}

#[test]
fn snapshot_conn_state_res() {
    let res = ConnStateRes {
        channel: 0x11,
        status: ConnState::INACTIVE,
    };
    assert_snapshot!(frame_to_hex(&res), @"1121");
}

#[test]
fn snapshot_disc_req() {
    let req = DiscReq {
        channel: 0x11,
        status: 0x00,
        control: client(),
    };
    assert_snapshot!(frame_to_hex(&req), @"11000801c0a80114c3b4");
}

#[test]
fn snapshot_disc_res() {
    let res = DiscRes {
        channel: 0x11,
        status: 0x00,
    };
    assert_snapshot!(frame_to_hex(&res), @"1100");
}

#[test]
fn every_body_truncated_by_one_byte_fails() {
    fn check<M: Message + std::fmt::Debug>(message: M) {
        let wire = message.to_bytes().expect("encoding should succeed");
        let err = M::unpack(&wire[..wire.len() - 1]).expect_err("short buffer must fail");
        assert!(
            matches!(err, knxprims_frame::FrameError::Truncated { .. }),
            "unexpected error {err:?}"
        );
    }

    check(ConnReq::tunnel(client()));
    check(ConnRes {
        channel: 1,
        status: ConnResStatus::BUSY,
        control: gateway(),
    });
    check(ConnStateReq {
        channel: 1,
        status: 0,
        control: client(),
    });
    check(ConnStateRes {
        channel: 1,
        status: ConnState::NORMAL,
    });
    check(DiscReq {
        channel: 1,
        status: 0,
        control: client(),
    });
    check(DiscRes {
        channel: 1,
        status: 0,
    });
}
