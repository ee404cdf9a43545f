use historian_utils::data::formatter::*;

#[test]
fn describe_bytes_thresholds() {
    assert_eq!(describe_bytes(0.0), "0.00 bytes");
    assert_eq!(describe_bytes(511.0), "511.00 bytes");
    assert_eq!(describe_bytes(512.0), "0.50 KB");
    assert_eq!(describe_bytes(1024.0), "1.00 KB");
    assert_eq!(describe_bytes(1024.0 * 1024.0), "1.00 MB");
    assert_eq!(describe_bytes(512.0 * 1024.0), "0.50 MB");
    assert_eq!(describe_bytes(3.0 * 1024.0 * 1024.0 * 1024.0), "3.00 GB");
}

#[test]
fn byte_formatter_custom_threshold_and_places() {
    let f = ByteFormatter { threshold: 1.0, decimal_places: 1 };
    assert_eq!(f.format(512.0), "512.0 bytes");
    assert_eq!(f.format(2048.0), "2.0 KB");
}

#[test]
fn to_valid_id_strips_and_lowercases() {
    assert_eq!(to_valid_id("Hello World!"), "helloworld");
    assert_eq!(to_valid_id("com.android.Phone_2-x"), "comandroidphone_2-x");
    assert_eq!(to_valid_id(""), "");
}

#[test]
fn to_valid_id_is_idempotent() {
    for s in ["Abc DEF", "*wakelock*", "über-ÅÄÖ_9", "  --__  ", "SyncManager/Account"] {
        let once = to_valid_id(s);
        assert_eq!(to_valid_id(&once), once, "not idempotent for {:?}", s);
    }
}

#[test]
fn pad_string_left_pads() {
    assert_eq!(pad_string("7", 2, '0'), "07");
    assert_eq!(pad_string("123", 2, '0'), "123");
    assert_eq!(pad_string("", 3, ' '), "   ");
}

#[test]
fn charge_formatter_default_has_no_unit() {
    assert_eq!(ChargeFormatter::default().format(12.346), "12.35");
}
