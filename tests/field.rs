use cepas::field::{
    amount::{Amount, decode_amount, decode_amount_as_integer},
    date::{decode_date, decode_date_time, format_date, format_date_time},
    hex::{field, from_hex, to_hex},
    status::{
        AutoloadStatus, PurseStatus, decode_autoload_amount, decode_autoload_status,
        decode_card_profile, decode_purse_status,
    },
    transaction::{TransactionType, classify_transaction_type, decode_user_data},
};
use chrono::NaiveDate;
use csv::ReaderBuilder;

#[test]
fn amounts_match_fixture() {
    const PATH: &str = "fixtures/amounts.csv";
    let mut reader = ReaderBuilder::new().from_path(PATH).unwrap();

    for record in reader.records() {
        let record = record.unwrap();
        let (field, type_code) = (&record[0], &record[1]);

        let amount = decode_amount(field, type_code);
        assert_eq!(amount.to_string(), &record[2], "{field} {type_code}");

        let cents: u32 = record[3].parse().unwrap();
        assert_eq!(decode_amount_as_integer(field, type_code), cents, "{field} {type_code}");
    }
}

#[test]
fn leading_zero_nibble_selects_credit() {
    for value in [0x000000, 0x000001, 0x00FFFF, 0x0ABCDE, 0x0FFFFF] {
        let field = format!("{value:06X}");
        assert_eq!(decode_amount(&field, ""), Amount::Credit(value));
    }
}

#[test]
fn other_leading_nibbles_select_debit() {
    for value in [0x100000, 0x7FFFFF, 0x800000, 0xABCDEF, 0xFFFFFF] {
        let field = format!("{value:06X}");
        assert_eq!(decode_amount(&field, ""), Amount::Debit(0xFFFFFF - value + 1));
    }
}

#[test]
fn excluded_types_are_not_applicable_for_any_field() {
    for type_code in ["F0", "83", "11"] {
        for field in ["000000", "000064", "FFFF9C", "800000"] {
            assert_eq!(decode_amount(field, type_code), Amount::NotApplicable);
            assert_eq!(decode_amount_as_integer(field, type_code), 0);
        }
    }
}

#[test]
fn amount_conversions() {
    assert_eq!(Amount::Debit(150).signed_cents(), Some(-150));
    assert_eq!(Amount::Credit(150).signed_cents(), Some(150));
    assert_eq!(Amount::NotApplicable.signed_cents(), None);

    assert_eq!(Amount::Debit(150).to_decimal().unwrap().to_string(), "-1.50");
    assert_eq!(Amount::Credit(123456).to_decimal().unwrap().to_string(), "1234.56");
    assert_eq!(Amount::NotApplicable.to_decimal(), None);

    assert!(Amount::ZERO.is_applicable());
    assert!(!Amount::NotApplicable.is_applicable());
    assert_eq!(Amount::ZERO.to_string(), "$0.00");
    assert_eq!(Amount::Credit(100_000_000).to_string(), "$1,000,000.00");
}

#[test]
fn dates_count_from_card_epoch() {
    let epoch = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();

    assert_eq!(decode_date("0000"), Some(epoch));
    assert_eq!(format_date(decode_date("0000")), "01/01/1995");
    assert_eq!(format_date(decode_date("0064")), "11/04/1995");
    assert_eq!(format_date(decode_date("3A98")), "26/01/2036");

    assert_eq!(decode_date(""), None);
    assert_eq!(decode_date("ZZZZ"), None);
    assert_eq!(format_date(decode_date("")), "");
}

#[test]
fn timestamps_are_shifted_back_eight_hours() {
    assert_eq!(format_date_time(decode_date_time("00000000")), "31/12/1994 16:00:00");
    assert_eq!(format_date_time(decode_date_time("00007080")), "01/01/1995 00:00:00");
    assert_eq!(format_date_time(decode_date_time("12345678")), "04/09/2004 14:51:36");
    assert_eq!(format_date_time(decode_date_time("FFFFFFFF")), "06/02/2131 22:28:15");

    assert_eq!(decode_date_time("0000"), decode_date_time("00000000"));
    assert_eq!(format_date_time(decode_date_time("-1")), "");
}

#[test]
fn status_byte_bits() {
    let cases = [
        ("00", AutoloadStatus::NotApplicable, Some(PurseStatus::NotEnabled)),
        ("02", AutoloadStatus::NotApplicable, Some(PurseStatus::NotEnabled)),
        ("01", AutoloadStatus::NotEnabled, Some(PurseStatus::Enabled)),
        ("03", AutoloadStatus::Enabled, Some(PurseStatus::Enabled)),
        ("FF", AutoloadStatus::Enabled, Some(PurseStatus::Enabled)),
        ("FD", AutoloadStatus::NotEnabled, Some(PurseStatus::Enabled)),
        ("", AutoloadStatus::NotApplicable, None),
        ("XY", AutoloadStatus::NotApplicable, None),
        ("100", AutoloadStatus::NotApplicable, None),
    ];

    for (field, autoload, purse) in cases {
        assert_eq!(decode_autoload_status(field), autoload, "{field}");
        assert_eq!(decode_purse_status(field), purse, "{field}");
    }

    assert_eq!(AutoloadStatus::NotApplicable.to_string(), "N.A.");
    assert_eq!(AutoloadStatus::NotEnabled.to_string(), "Not Enabled");
    assert_eq!(PurseStatus::Enabled.to_string(), "Enabled");
}

#[test]
fn autoload_amount_requires_both_bits() {
    assert_eq!(decode_autoload_amount("03", "001388"), Amount::Credit(5000));
    assert_eq!(decode_autoload_amount("01", "001388"), Amount::NotApplicable);
    assert_eq!(decode_autoload_amount("02", "001388"), Amount::NotApplicable);
    assert_eq!(decode_autoload_amount("", "001388"), Amount::NotApplicable);
    assert_eq!(decode_autoload_amount("03", "FFFF9C").to_string(), "-$1.00");
}

#[test]
fn card_profile_uses_low_six_bits() {
    assert_eq!(decode_card_profile("05"), Some(5));
    assert_eq!(decode_card_profile("C5"), Some(5));
    assert_eq!(decode_card_profile("FF"), Some(63));
    assert_eq!(decode_card_profile(""), None);
}

#[test]
fn transaction_types_match_fixture() {
    const PATH: &str = "fixtures/transaction_types.csv";
    let mut reader = ReaderBuilder::new().from_path(PATH).unwrap();

    for record in reader.records() {
        let record = record.unwrap();
        let kind = classify_transaction_type(&record[0]);

        assert_eq!(kind.to_string(), &record[1]);
        assert_eq!(kind.code(), &record[0]);
    }
}

#[test]
fn unknown_transaction_types_pass_through() {
    assert_eq!(
        classify_transaction_type("4F"),
        TransactionType::Unknown("4F".to_string())
    );
    assert_eq!(classify_transaction_type("31"), TransactionType::BusPayment);
    assert_eq!(classify_transaction_type("0A0"), TransactionType::RetailPayment);
}

#[test]
fn user_data_by_type() {
    let user_data = *b"ABCDEFGH";

    assert_eq!(decode_user_data("07", &user_data), "4546");
    assert_eq!(decode_user_data("09", &user_data), "4445");
    assert_eq!(decode_user_data("08", &user_data), "ABCDEFGH");
    assert_eq!(decode_user_data("31", &user_data), "ABCDEFGH");

    let user_data = [0x00, 0x00, 0x00, 0x0A, 0xB1, 0x02, 0xFF, 0x80];
    assert_eq!(decode_user_data("07", &user_data), "B102");
    assert_eq!(decode_user_data("09", &user_data), "0AB1");
    assert_eq!(decode_user_data("08", &user_data), "");
    assert_eq!(decode_user_data("30", &user_data), "");
}

#[test]
fn hex_round_trip() {
    for digits in ["", "00", "0A1B", "CAFEBABE00000001", "FFFFFFFFFFFFFFFF"] {
        assert_eq!(to_hex(&from_hex(digits).unwrap()), digits);
    }

    assert_eq!(to_hex(&[0x00, 0x0A, 0xFF]), "000AFF");
    assert_eq!(from_hex("0a").unwrap(), vec![0x0A]);
    assert!(from_hex("ABC").is_err());
    assert!(from_hex("ZZ").is_err());
}

#[test]
fn fields_are_cut_short_at_end_of_response() {
    let hex = "0102030405";

    assert_eq!(field(hex, 1..3), "0203");
    assert_eq!(field(hex, 3..8), "0405");
    assert_eq!(field(hex, 5..6), "");
    assert_eq!(field(hex, 40..41), "");
}
