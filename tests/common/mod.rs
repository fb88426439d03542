#![allow(dead_code)]

/// A card detail response with an enabled purse and autoload.
///
/// Balance `$1.00`, autoload amount `$50.00`, expiry 100 days after the card
/// epoch, two declared log entries, profile 5, and a bus payment of `$1.00`
/// as the last transaction.
pub fn detail() -> Vec<u8> {
    let mut r = vec![0; 67];

    r[0] = 0x02;
    r[1] = 0x03;
    r[2..5].copy_from_slice(&[0x00, 0x00, 0x64]);
    r[5..8].copy_from_slice(&[0x00, 0x13, 0x88]);
    r[8..16].copy_from_slice(&[0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x01]);
    r[24..26].copy_from_slice(&[0x00, 0x64]);
    r[40] = 0x02;
    r[46..62].copy_from_slice(&log(0x31, [0xFF, 0xFF, 0x9C], 0x7080, *b"SVC 190 "));
    r[66] = 0x05;

    r
}

/// A transaction log entry.
pub fn log(kind: u8, amount: [u8; 3], timestamp: u32, user_data: [u8; 8]) -> Vec<u8> {
    let mut r = vec![kind];

    r.extend_from_slice(&amount);
    r.extend_from_slice(&timestamp.to_be_bytes());
    r.extend_from_slice(&user_data);

    r
}
