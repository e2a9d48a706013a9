//! Model tests: JSON shapes, grade bands, time ranges and display helpers.

mod common;

use chrono::NaiveDate;
use pokewealth_sdk::format::{format_change, format_usd, parse_timestamp_date, short_date};
use pokewealth_sdk::models::{
    AnalysisResult, ChartPoint, GradeBand, GradingDimension, GradingEdit, PortfolioSummary,
    PriceChange, PriceHistoryEntry, SavedCard, TimeRange,
};
use serde_json::json;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

#[test]
fn analysis_parses_grading_and_market_fields() {
    let result = common::analysis();
    assert_eq!(result.card_name, "Charizard");
    assert_eq!(result.centering.as_ref().unwrap().score, 8.5);
    assert_eq!(result.corners.as_ref().unwrap().description, "Sharp");
    assert_eq!(result.overall_grade, Some(7.75));
    assert_eq!(result.set_name.as_deref(), Some("Base Set"));
    assert_eq!(result.psa_8_price, None);
    assert!(result.has_grading());
}

#[test]
fn analysis_without_optionals_is_not_an_error() {
    let result = common::bare_analysis();
    assert!(!result.has_grading());
    assert!(result.market_price.is_none());
    for dimension in GradingDimension::ALL {
        assert!(result.condition(dimension).is_none());
    }
}

#[test]
fn analysis_ignores_unknown_keys_and_defaults_details() {
    let result: AnalysisResult = serde_json::from_str(
        r#"{"card_name": "Mew", "estimated_price": "$40", "confidence": 0.9}"#,
    )
    .unwrap();
    assert_eq!(result.details, "");
}

#[test]
fn analysis_null_text_reads_as_empty() {
    let result: AnalysisResult = serde_json::from_value(json!({
        "card_name": "Mew",
        "estimated_price": "$40",
        "details": null,
        "centering": { "score": 8.0, "description": null }
    }))
    .unwrap();
    assert_eq!(result.details, "");
    let centering = result.centering.as_ref().unwrap();
    assert_eq!(centering.score, 8.0);
    assert_eq!(centering.description, "");

    let edit = GradingEdit::from_analysis(&result);
    assert_eq!(edit.entry(GradingDimension::Centering).score, "8");
    assert_eq!(edit.entry(GradingDimension::Centering).description, "");
}

// ---------------------------------------------------------------------------
// SavedCard
// ---------------------------------------------------------------------------

#[test]
fn saved_cards_with_null_details_still_decode() {
    let cards: Vec<SavedCard> = serde_json::from_value(json!([
        {
            "id": 1,
            "card_name": "Pikachu",
            "estimated_price": "$5",
            "details": null,
            "image_filename": null,
            "created_at": "2025-01-01T00:00:00"
        },
        common::saved_card_json(2, "Charizard", true)
    ]))
    .unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].details, "");
    assert!(cards[0].sub_scores().is_empty());
    assert_eq!(cards[1].details, "Base Set");
}

#[test]
fn saved_card_sub_scores_skip_unscored_dimensions() {
    let card = common::saved_card(1, "Charizard", true);
    let subs = card.sub_scores();
    let dims: Vec<_> = subs.iter().map(|s| s.dimension).collect();
    assert_eq!(
        dims,
        vec![
            GradingDimension::Centering,
            GradingDimension::Corners,
            GradingDimension::Surface
        ]
    );
    assert_eq!(subs[0].description, Some("Well centered"));
    assert_eq!(subs[0].band, GradeBand::Strong);
    assert_eq!(subs[1].band, GradeBand::Fair);
    assert_eq!(subs[2].band, GradeBand::Poor);
}

#[test]
fn saved_card_bands_and_psa_prices() {
    let card = common::saved_card(1, "Charizard", true);
    assert_eq!(card.overall_band(), Some(GradeBand::Weak));
    assert_eq!(card.psa_prices(), vec![(10, 5000.0), (9, 1200.0)]);
    assert_eq!(card.is_authentic, Some(true));
}

// ---------------------------------------------------------------------------
// GradeBand
// ---------------------------------------------------------------------------

#[test]
fn grade_band_thresholds_are_inclusive() {
    assert_eq!(GradeBand::for_score(10.0), GradeBand::Strong);
    assert_eq!(GradeBand::for_score(9.0), GradeBand::Strong);
    assert_eq!(GradeBand::for_score(8.99), GradeBand::Fair);
    assert_eq!(GradeBand::for_score(7.0), GradeBand::Fair);
    assert_eq!(GradeBand::for_score(6.9), GradeBand::Weak);
    assert_eq!(GradeBand::for_score(5.0), GradeBand::Weak);
    assert_eq!(GradeBand::for_score(4.9), GradeBand::Poor);
    assert_eq!(GradeBand::for_score(1.0), GradeBand::Poor);
}

#[test]
fn grade_band_labels() {
    assert_eq!(GradeBand::for_score(9.0).label(), "strong");
    assert_eq!(GradeBand::for_score(7.0).label(), "fair");
    assert_eq!(GradeBand::for_score(5.0).label(), "weak");
    assert_eq!(GradeBand::for_score(4.9).label(), "poor");
}

#[test]
fn grading_dimension_form_field_names() {
    assert_eq!(GradingDimension::Centering.score_field(), "centering_score");
    assert_eq!(GradingDimension::Centering.description_field(), "centering_comment");
    assert_eq!(GradingDimension::Edges.description_field(), "edges_description");
}

// ---------------------------------------------------------------------------
// PortfolioSummary
// ---------------------------------------------------------------------------

#[test]
fn portfolio_summary_reads_numeric_bucket_keys() {
    let summary: PortfolioSummary = serde_json::from_value(common::portfolio_json()).unwrap();
    assert_eq!(summary.total_cards, 12);
    assert_eq!(summary.price_changes.one_day.value, 12.5);
    assert_eq!(summary.price_changes.three_months.percentage, 2.6);

    let labels: Vec<_> = summary
        .price_changes
        .buckets()
        .iter()
        .map(|(label, _)| *label)
        .collect();
    assert_eq!(labels, vec!["1 Day", "1 Month", "3 Months", "1 Year"]);
    assert!(!summary.price_changes.one_month.is_gain());
}

// ---------------------------------------------------------------------------
// TimeRange
// ---------------------------------------------------------------------------

#[test]
fn time_range_days() {
    let days: Vec<u32> = TimeRange::ALL.iter().map(|r| r.days()).collect();
    assert_eq!(days, vec![1, 30, 90, 365, 365]);
    assert_eq!(TimeRange::default(), TimeRange::OneMonth);
}

#[test]
fn time_range_parses_keys() {
    assert_eq!(TimeRange::from_str("3m").unwrap(), TimeRange::ThreeMonths);
    assert_eq!(TimeRange::from_str("all").unwrap(), TimeRange::All);
    assert!(TimeRange::from_str("5y").is_err());
    assert_eq!(TimeRange::OneYear.to_string(), "1y");
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn usd_formatting() {
    assert_eq!(format_usd(0.0), "$0");
    assert_eq!(format_usd(999.0), "$999");
    assert_eq!(format_usd(1000.0), "$1,000");
    assert_eq!(format_usd(1234567.0), "$1,234,567");
    assert_eq!(format_usd(12345.5), "$12,345.50");
    assert_eq!(format_usd(-40.0), "-$40");
}

#[test]
fn change_formatting_is_signed() {
    let up = PriceChange {
        value: 12.5,
        percentage: 3.2,
    };
    let down = PriceChange {
        value: -40.0,
        percentage: -0.32,
    };
    assert_eq!(format_change(&up), "+$12.50 (+3.20%)");
    assert_eq!(format_change(&down), "-$40 (-0.32%)");
}

#[test]
fn timestamps_parse_in_common_shapes() {
    let jan15 = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(parse_timestamp_date("2025-01-15T09:30:00"), Some(jan15));
    assert_eq!(parse_timestamp_date("2025-01-15T09:30:00.123456"), Some(jan15));
    assert_eq!(parse_timestamp_date("2025-01-15 09:30:00"), Some(jan15));
    assert_eq!(parse_timestamp_date("2025-01-15T09:30:00+00:00"), Some(jan15));
    assert_eq!(parse_timestamp_date("2025-01-15"), Some(jan15));
    assert_eq!(parse_timestamp_date("last tuesday"), None);
    assert_eq!(short_date(jan15), "1/15/2025");
}

#[test]
fn chart_point_from_history_entry() {
    let entry = PriceHistoryEntry {
        recorded_at: "2025-03-04T12:00:00".into(),
        price: 195.5,
        price_display: "$195.50".into(),
    };
    let point = ChartPoint::from_history(&entry);
    assert_eq!(point.date, "3/4/2025");
    assert_eq!(point.value, 195.5);
    assert_eq!(point.display, "$195.50");

    let odd = PriceHistoryEntry {
        recorded_at: "yesterday".into(),
        price: 1.0,
        price_display: "$1".into(),
    };
    assert_eq!(ChartPoint::from_history(&odd).date, "yesterday");
}
