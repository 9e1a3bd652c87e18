//! End-to-end validation tables for the public value objects.

use fiscal_id::{CasePolicy, Cnpj, Cpf, DocumentKind};
use rstest::rstest;

#[rstest]
#[case("123.456.789-09", true)]
#[case("12345678909", true)]
#[case("111.444.777-35", true)]
#[case("11144477735", true)]
#[case("000.000.001-91", true)]
#[case("00000000191", true)]
#[case("987.654.321-00", true)]
#[case("111.111.111-11", false)]
#[case("000.000.000-00", false)]
#[case("222.222.222-22", false)]
#[case("555.555.555-55", false)]
#[case("999.999.999-99", false)]
#[case("123.456.789-00", false)]
#[case("123.456.789-99", false)]
#[case("111.444.777-00", false)]
#[case("000.000.001-00", false)]
#[case("123.456.789-10", false)]
#[case("123.456.789", false)]
#[case("123456789", false)]
#[case("12345678", false)]
#[case("1234567890", false)]
#[case("123456789012", false)]
#[case("123.456.ABC-09", false)]
#[case("ABC.DEF.GHI-JK", false)]
#[case("12345678ABC", false)]
#[case("", false)]
#[case("   ", false)]
fn cpf_validation(#[case] raw: &str, #[case] expected: bool) {
    let strict = Cpf::new(raw);
    assert_eq!(strict.is_ok(), expected, "CPF {raw:?}");
    assert_eq!(
        Cpf::try_create(Some(raw)).is_some(),
        expected,
        "CPF {raw:?}"
    );

    let mut out = None;
    assert_eq!(Cpf::try_parse(Some(raw), &mut out), expected);
    assert_eq!(out.is_some(), expected);

    if let Err(err) = strict {
        assert_eq!(err.kind(), DocumentKind::Cpf);
        assert_eq!(err.value(), raw);
    }
}

#[rstest]
#[case("11.222.333/0001-81", true)]
#[case("11222333000181", true)]
#[case("12ABC34501DE35", true)]
#[case("1345C3A5000106", true)]
#[case("90.021.382/0001-22", true)]
#[case("90021382000122", true)]
#[case("90.024.778/0001-23", true)]
#[case("90024778000123", true)]
#[case("00.000.000/0000-00", false)]
#[case("00000000000000", false)]
#[case("11.111.111/1111-11", false)]
#[case("11111111111111", false)]
#[case("22.222.222/2222-22", false)]
#[case("99.999.999/9999-99", false)]
#[case("90.025.108/0001-01", false)]
#[case("90025108000101", false)]
#[case("11.222.333/0001-82", false)]
#[case("R55231B3000700", false)]
#[case("1345c3A5000106", false)]
#[case("12abc34501de35", false)]
#[case("9002442000010A", false)]
#[case("11.222.333/0001", false)]
#[case("112223330001", false)]
#[case("11.222.333", false)]
#[case("1122233300018", false)]
#[case("112223330001811", false)]
#[case("11.222.ABC/0001-81", false)]
#[case("AB.CDE.FGH/IJKL-MN", false)]
#[case("1122233300018A", false)]
#[case("", false)]
#[case("   ", false)]
fn cnpj_validation(#[case] raw: &str, #[case] expected: bool) {
    let strict = Cnpj::new(raw);
    assert_eq!(strict.is_ok(), expected, "CNPJ {raw:?}");
    assert_eq!(
        Cnpj::try_create(Some(raw)).is_some(),
        expected,
        "CNPJ {raw:?}"
    );

    let mut out = None;
    assert_eq!(Cnpj::try_parse(Some(raw), &mut out), expected);
    assert_eq!(out.is_some(), expected);

    if let Err(err) = strict {
        assert_eq!(err.kind(), DocumentKind::Cnpj);
        assert_eq!(err.value(), raw);
    }
}

#[test]
fn absent_input_yields_nothing() {
    let mut cpf = None;
    let mut cnpj = None;
    assert!(!Cpf::try_parse(None, &mut cpf));
    assert!(!Cnpj::try_parse(None, &mut cnpj));
    assert!(Cpf::try_create(None).is_none());
    assert!(Cnpj::try_create(None).is_none());
    assert_eq!(Cnpj::display_or_empty(cnpj.as_ref()), "");
}

#[rstest]
#[case("11.222.333/0001-81", "11222333000181", "11.222.333/0001-81")]
#[case("90021382000122", "90021382000122", "90.021.382/0001-22")]
#[case(" 90.024.778/0001-23\n", "90024778000123", "90.024.778/0001-23")]
fn cnpj_forms(#[case] raw: &str, #[case] unformatted: &str, #[case] formatted: &str) {
    let cnpj = Cnpj::new(raw).unwrap();
    assert_eq!(cnpj.value(), raw);
    assert_eq!(cnpj.unformatted_value(), unformatted);
    assert_eq!(cnpj.formatted_value(), formatted);
    assert!(cnpj.is_valid());
}

#[rstest]
#[case("123.456.789-09", "12345678909", "123.456.789-09")]
#[case("11144477735", "11144477735", "111.444.777-35")]
#[case("000.000.001-91", "00000000191", "000.000.001-91")]
fn cpf_forms(#[case] raw: &str, #[case] unformatted: &str, #[case] formatted: &str) {
    let cpf = Cpf::new(raw).unwrap();
    assert_eq!(cpf.value(), raw);
    assert_eq!(cpf.unformatted_value(), unformatted);
    assert_eq!(cpf.formatted_value(), formatted);
}

#[test]
fn fold_policy_is_opt_in() {
    assert!(Cnpj::new("1345c3A5000106").is_err());
    assert!(Cnpj::try_create(Some("1345c3A5000106")).is_none());

    let folded = Cnpj::try_create_with_policy(Some("1345c3A5000106"), CasePolicy::Fold).unwrap();
    assert_eq!(folded, Cnpj::new("1345C3A5000106").unwrap());
    assert_eq!(folded.formatted_value(), "13.45C.3A5/0001-06");
}

#[test]
fn formatted_output_matches_pattern() {
    for raw in ["11.222.333/0001-81", "11222333000181", "90.021.382/0001-22"] {
        let formatted = Cnpj::new(raw).unwrap().formatted_value();
        let bytes = formatted.as_bytes();
        assert_eq!(bytes.len(), 18);
        assert_eq!(bytes[2], b'.');
        assert_eq!(bytes[6], b'.');
        assert_eq!(bytes[10], b'/');
        assert_eq!(bytes[15], b'-');
    }
}
