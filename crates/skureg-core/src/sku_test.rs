use super::*;

#[test]
fn parses_reference_code() {
    let parsed = parse_sku("DMU26101").expect("valid code");
    assert_eq!(parsed.normalized, "DMU26101");
    assert_eq!(parsed.age.label, "아이더 성인");
    assert_eq!(parsed.gender.label, "남성");
    assert_eq!(parsed.season.label, "가을");
    assert_eq!(parsed.year.code, "26");
    assert_eq!(parsed.year.label, "2026년도");
    assert_eq!(parsed.item.label, "자켓");
    assert_eq!(parsed.line.code, "01");
    assert_eq!(parsed.line.label, "M");
    assert_eq!(parsed.meta.full_year, 2026);
    assert_eq!(parsed.meta.gender_display, "남성");
    assert_eq!(parsed.meta.item_code, "1");
    assert_eq!(parsed.meta.line_number, 1);
    assert_eq!(parsed.meta.line_group, LineGroup::Main);
}

#[test]
fn trims_and_uppercases_input() {
    let parsed = parse_sku("  jwf24b85 ").expect("valid code");
    assert_eq!(parsed.normalized, "JWF24B85");
    assert_eq!(parsed.age.label, "아이더 키즈");
    assert_eq!(parsed.season.label, "가을/겨울");
    assert_eq!(parsed.item.label, "백팩");
    assert_eq!(parsed.meta.line_group, LineGroup::Pop);
}

#[test]
fn unisex_gender_uses_display_wording_in_meta() {
    let parsed = parse_sku("DUA25245").expect("valid code");
    assert_eq!(parsed.gender.label, "공용");
    assert_eq!(parsed.meta.gender_display, "남녀공용");
    assert_eq!(parsed.meta.line_group, LineGroup::Core);
}

#[test]
fn fields_are_in_positional_order() {
    let parsed = parse_sku("DMU26101").expect("valid code");
    let order: Vec<SkuField> = parsed.fields().iter().map(|(f, _)| *f).collect();
    assert_eq!(
        order,
        vec![
            SkuField::Age,
            SkuField::Gender,
            SkuField::Season,
            SkuField::Year,
            SkuField::Item,
            SkuField::Line,
        ]
    );
    let codes: String = parsed.fields().iter().map(|(_, l)| l.code.as_str()).collect();
    assert_eq!(codes, parsed.normalized);
}

#[test]
fn from_str_delegates_to_parse() {
    let parsed: ParsedSku = "dmu26101".parse().expect("valid code");
    assert_eq!(parsed.normalized, "DMU26101");
}

#[test]
fn rejects_wrong_length() {
    assert_eq!(parse_sku("DMU2610"), Err(SkuError::Length { len: 7 }));
    assert_eq!(parse_sku("DMU261011"), Err(SkuError::Length { len: 9 }));
    assert_eq!(parse_sku(""), Err(SkuError::Length { len: 0 }));
}

#[test]
fn length_counts_characters_not_bytes() {
    let err = parse_sku("가MU26101").unwrap_err();
    assert_eq!(
        err,
        SkuError::Lookup {
            field: SkuField::Age,
            code: '가'
        }
    );
}

#[test]
fn rejects_non_digit_year_before_lookups() {
    let err = parse_sku("XXXA0101").unwrap_err();
    assert_eq!(
        err,
        SkuError::Format {
            field: SkuField::Year,
            value: "A0".to_string()
        }
    );
}

#[test]
fn rejects_non_digit_line_before_lookups() {
    let err = parse_sku("XXX261A1").unwrap_err();
    assert_eq!(
        err,
        SkuError::Format {
            field: SkuField::Line,
            value: "A1".to_string()
        }
    );
}

#[test]
fn year_format_is_checked_before_line_format() {
    let err = parse_sku("DMUAA1BB").unwrap_err();
    assert_eq!(err.field(), Some(SkuField::Year));
}

#[test]
fn invalid_age_is_the_first_lookup_failure() {
    let err = parse_sku("XXX00000").unwrap_err();
    assert_eq!(
        err,
        SkuError::Lookup {
            field: SkuField::Age,
            code: 'X'
        }
    );
}

#[test]
fn lookup_failures_follow_field_order() {
    assert_eq!(parse_sku("DXX26101").unwrap_err().field(), Some(SkuField::Gender));
    assert_eq!(parse_sku("DMX26101").unwrap_err().field(), Some(SkuField::Season));
    assert_eq!(parse_sku("DMU26X01").unwrap_err().field(), Some(SkuField::Item));
}

#[test]
fn item_zero_is_not_a_valid_item() {
    assert_eq!(
        parse_sku("DMU26001"),
        Err(SkuError::Lookup {
            field: SkuField::Item,
            code: '0'
        })
    );
}

#[test]
fn line_zero_is_out_of_range() {
    assert_eq!(
        parse_sku("DMU26100"),
        Err(SkuError::Range {
            field: SkuField::Line,
            value: 0
        })
    );
}

#[test]
fn lookup_failures_win_over_range_failures() {
    assert_eq!(parse_sku("DMU26X00").unwrap_err().field(), Some(SkuField::Item));
    assert!(matches!(
        parse_sku("DMU26X00"),
        Err(SkuError::Lookup { .. })
    ));
}

#[test]
fn error_messages_name_the_field_positions() {
    let err = parse_sku("DMU2610A").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line (positions 7-8) must be two digits, got \"0A\""
    );
    let err = parse_sku("QMU26101").unwrap_err();
    assert_eq!(err.to_string(), "unknown age (position 1) code \"Q\"");
}

#[test]
fn parse_is_idempotent() {
    assert_eq!(parse_sku("DMU26101"), parse_sku("DMU26101"));
    assert_eq!(parse_sku("bad"), parse_sku("bad"));
}

#[test]
fn every_valid_code_combination_parses() {
    let tables = CodeTables::standard();
    for age in ['D', 'J'] {
        for gender in ['M', 'W', 'U'] {
            for item in ['1', '2', '9', 'A', 'M', 'S', 'B', 'C', 'T', 'V', 'G', 'N'] {
                let code = format!("{age}{gender}P24{item}99");
                let parsed = parse_sku(&code).unwrap_or_else(|e| panic!("{code}: {e}"));
                assert_eq!(parsed.item.label, tables.item(item).unwrap_or_default());
            }
        }
    }
}
