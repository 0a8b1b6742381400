// tests/rank.rs
//
// Bayesian smoothing properties and coercion of extracted text.

use shelf_scrape::model::Field;
use shelf_scrape::rank::{self, Effect, Prior, RankError};

#[test]
fn default_prior_is_mean_3_5_weight_10000() {
    let p = Prior::default();
    assert_eq!(p.mean, 3.5);
    assert_eq!(p.count, 10_000);
}

#[test]
fn few_ratings_stay_near_prior() {
    let p = Prior::default();
    assert_eq!(rank::normalize(5.0, 3, &p), 3.5);
    assert_eq!(rank::normalize(4.5, 10, &p), 3.5);
}

#[test]
fn volume_beats_a_handful_of_perfect_scores() {
    let p = Prior::default();
    let popular = rank::normalize(4.3, 50_000, &p);
    let obscure = rank::normalize(5.0, 3, &p);
    assert_eq!(popular, 4.17);
    assert!(popular > obscure);
}

#[test]
fn more_ratings_move_score_toward_raw() {
    let p = Prior::default();
    let raw = 4.8;
    let mut last_gap = f64::INFINITY;
    for n in [0u64, 10, 1_000, 10_000, 100_000, 10_000_000] {
        let s = p.smooth(raw, n);
        assert!(s >= p.mean && s <= raw, "n={n} s={s}");
        let gap = (raw - s).abs();
        assert!(gap < last_gap, "n={n} gap={gap} last={last_gap}");
        last_gap = gap;
    }
}

#[test]
fn raw_equal_to_prior_mean_is_fixed_point() {
    let p = Prior::default();
    for n in [0u64, 1, 42, 10_000, 5_000_000] {
        assert_eq!(rank::normalize(p.mean, n, &p), p.mean);
    }
    assert_eq!(rank::normalize(4.9, 0, &p), p.mean);
}

#[test]
fn halfway_scores_round_from_their_stored_value() {
    let p = Prior::default();
    // (3.5 + 3.55) / 2 is stored just under 3.525
    assert_eq!(rank::normalize(3.55, 10_000, &p), 3.52);
    assert_eq!(rank::compare(3.55, 10_000, &p).difference, 0.03);
}

#[test]
fn below_prior_is_pulled_up() {
    let p = Prior::default();
    let s = p.smooth(2.0, 500);
    assert!(s > 2.0 && s < p.mean);
}

#[test]
fn zero_weight_prior_returns_raw() {
    let p = Prior::new(3.5, 0);
    assert_eq!(rank::normalize(4.12, 100, &p), 4.12);
}

#[test]
fn zero_weight_and_no_ratings_returns_prior_mean() {
    let p = Prior::new(3.5, 0);
    assert_eq!(rank::normalize(4.12, 0, &p), 3.5);
}

#[test]
fn prior_mean_out_of_range_is_config_error() {
    assert!(Prior::new(6.0, 10).validate().unwrap_err().is_config());
    assert!(Prior::new(f64::NAN, 10).validate().unwrap_err().is_config());
    assert!(Prior::new(-0.5, 10).validate().is_err());
    assert!(Prior::new(0.0, 10).validate().is_ok());
}

#[test]
fn count_separators_are_stripped() {
    assert_eq!(rank::parse_count("1,234,567").unwrap(), 1_234_567);
    assert_eq!(rank::parse_count(" 12 345 ").unwrap(), 12_345);
    assert_eq!(rank::parse_count("98\u{a0}765").unwrap(), 98_765);
    assert_eq!(rank::parse_count("0").unwrap(), 0);
}

#[test]
fn non_numeric_count_is_rejected() {
    let err = rank::parse_count("many").unwrap_err();
    assert_eq!(err, RankError::NotNumeric { field: "rating count", value: "many".into() });
    assert!(rank::parse_count("").is_err());
    assert!(rank::parse_count("-5").is_err());
}

#[test]
fn rating_must_be_numeric_and_in_range() {
    assert_eq!(rank::parse_rating(" 4.12 ").unwrap(), 4.12);
    assert!(matches!(rank::parse_rating("4.2x"), Err(RankError::NotNumeric { .. })));
    assert!(matches!(rank::parse_rating("5.5"), Err(RankError::OutOfRange { .. })));
    assert!(matches!(rank::parse_rating("NaN"), Err(RankError::OutOfRange { .. })));
}

#[test]
fn unknown_fields_are_an_error_not_a_score() {
    let p = Prior::default();
    let known = Field::Found(String::from("4.12"));
    let count = Field::Found(String::from("1,000"));

    assert_eq!(
        rank::normalize_fields(&Field::Unknown, &count, &p),
        Err(RankError::Unknown { field: "rating" })
    );
    assert_eq!(
        rank::normalize_fields(&known, &Field::Unknown, &p),
        Err(RankError::Unknown { field: "rating count" })
    );
    assert_eq!(
        rank::normalize_fields(&known, &count, &p),
        Ok(rank::normalize(4.12, 1_000, &p))
    );
}

#[test]
fn compare_reports_direction() {
    let p = Prior::default();

    let down = rank::compare(4.5, 10, &p);
    assert_eq!(down.score, 3.5);
    assert_eq!(down.difference, 1.0);
    assert_eq!(down.effect, Effect::PulledDown);

    let up = rank::compare(2.0, 100, &p);
    assert_eq!(up.score, 3.49);
    assert_eq!(up.effect, Effect::PulledUp);

    assert_eq!(rank::compare(3.5, 100, &p).effect, Effect::Unchanged);
}
