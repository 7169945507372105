//! Domain-focused tests for passport validation and user construction.

use super::FixedClock;
use crate::directory::domain::{EnrichedProfile, PassportId, User, UserDomainError, UserUpdate};
use chrono::{TimeZone, Utc};
use mockable::Clock;
use rstest::rstest;

#[rstest]
fn passport_parse_accepts_series_and_number() {
    let passport = PassportId::parse("AB 123456").expect("valid passport");

    assert_eq!(passport.series(), "AB");
    assert_eq!(passport.number(), "123456");
}

#[rstest]
#[case("AB123")]
#[case("AB 12 34")]
#[case(" AB 123")]
#[case("AB ")]
#[case(" 123456")]
#[case("AB  123")]
#[case("")]
fn passport_parse_rejects_malformed(#[case] raw: &str) {
    assert_eq!(
        PassportId::parse(raw),
        Err(UserDomainError::InvalidPassport(raw.to_owned()))
    );
}

#[rstest]
fn passport_display_round_trips() {
    let passport = PassportId::parse("AB 123456").expect("valid passport");
    let rendered = passport.to_string();

    assert_eq!(rendered, "AB 123456");
    assert_eq!(PassportId::parse(&rendered), Ok(passport));
}

#[rstest]
fn user_new_enriched_copies_profile_and_stamps_clock() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap());
    let passport = PassportId::parse("AB 123456").expect("valid passport");
    let profile = EnrichedProfile::new("Ivanov", "Ivan", "Ivanovich", "Moscow");

    let user = User::new_enriched(passport.clone(), profile, &clock);

    assert_eq!(user.passport(), &passport);
    assert_eq!(user.surname(), "Ivanov");
    assert_eq!(user.given_name(), "Ivan");
    assert_eq!(user.patronymic(), "Ivanovich");
    assert_eq!(user.address(), "Moscow");
    assert_eq!(user.created_at(), clock.utc());
    assert_eq!(user.updated_at(), clock.utc());
}

#[rstest]
fn user_new_enriched_keeps_empty_profile_strings() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap());
    let passport = PassportId::parse("CD 654321").expect("valid passport");

    let user = User::new_enriched(passport, EnrichedProfile::default(), &clock);

    assert_eq!(user.surname(), "");
    assert_eq!(user.given_name(), "");
    assert_eq!(user.patronymic(), "");
    assert_eq!(user.address(), "");
}

#[rstest]
fn user_apply_update_replaces_fields_and_touches() {
    let created = FixedClock(Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap());
    let updated = FixedClock(Utc.with_ymd_and_hms(2026, 7, 2, 10, 30, 0).unwrap());
    let passport = PassportId::parse("AB 123456").expect("valid passport");
    let mut user = User::new_enriched(
        passport,
        EnrichedProfile::new("Ivanov", "Ivan", "Ivanovich", "Moscow"),
        &created,
    );

    let replacement = PassportId::parse("CD 654321").expect("valid passport");
    user.apply_update(
        UserUpdate {
            passport: replacement.clone(),
            surname: "Petrov".to_owned(),
            given_name: "Pyotr".to_owned(),
            patronymic: String::new(),
            address: "Kazan".to_owned(),
        },
        &updated,
    );

    assert_eq!(user.passport(), &replacement);
    assert_eq!(user.surname(), "Petrov");
    assert_eq!(user.given_name(), "Pyotr");
    assert_eq!(user.patronymic(), "");
    assert_eq!(user.address(), "Kazan");
    assert_eq!(user.created_at(), created.utc());
    assert_eq!(user.updated_at(), updated.utc());
}
