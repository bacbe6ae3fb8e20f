use healbuddy_core::models::screening::ScreeningKind;
use healbuddy_screenings::scoring::{FREQUENCY_OPTIONS, INTENSITY_OPTIONS};
use healbuddy_screenings::{all_screenings, get_screening};

#[test]
fn three_screenings_with_fixed_lengths() {
    let lengths: Vec<(ScreeningKind, usize)> = all_screenings()
        .iter()
        .map(|s| (s.kind(), s.questions().len()))
        .collect();

    assert_eq!(
        lengths,
        vec![
            (ScreeningKind::Phq9, 9),
            (ScreeningKind::Gad7, 7),
            (ScreeningKind::Ghq, 12),
        ]
    );
}

#[test]
fn max_scores_are_three_points_per_question() {
    assert_eq!(get_screening(ScreeningKind::Phq9).max_score(), 27);
    assert_eq!(get_screening(ScreeningKind::Gad7).max_score(), 21);
    assert_eq!(get_screening(ScreeningKind::Ghq).max_score(), 36);
}

#[test]
fn severity_is_total_and_monotonic_over_full_range() {
    for screening in all_screenings() {
        let bands = screening.severity_bands();
        assert_eq!(
            bands.last().map(|band| band.upper),
            Some(screening.max_score()),
            "{} top band must cover max_score",
            screening.name()
        );

        let mut last_band_index = 0;
        for score in 0..=screening.max_score() {
            let label = screening.severity_for(score);
            let band_index = bands
                .iter()
                .position(|band| band.label == label)
                .unwrap_or_else(|| panic!("{} score {score} fell outside all bands", screening.name()));
            assert!(
                band_index >= last_band_index,
                "{} severity went backwards at score {score}",
                screening.name()
            );
            last_band_index = band_index;
        }
    }
}

#[test]
fn phq9_band_boundaries() {
    let screening = get_screening(ScreeningKind::Phq9);
    assert_eq!(screening.severity_for(0), "Minimal symptoms of depression");
    assert_eq!(screening.severity_for(4), "Minimal symptoms of depression");
    assert_eq!(screening.severity_for(5), "Mild depression");
    assert_eq!(screening.severity_for(9), "Mild depression");
    assert_eq!(screening.severity_for(10), "Moderate depression");
    assert_eq!(screening.severity_for(14), "Moderate depression");
    assert_eq!(screening.severity_for(15), "Moderately severe depression");
    assert_eq!(screening.severity_for(19), "Moderately severe depression");
    assert_eq!(screening.severity_for(20), "Severe depression");
    assert_eq!(screening.severity_for(27), "Severe depression");
}

#[test]
fn gad7_band_boundaries() {
    let screening = get_screening(ScreeningKind::Gad7);
    assert_eq!(screening.severity_for(4), "Minimal anxiety");
    assert_eq!(screening.severity_for(5), "Mild anxiety");
    assert_eq!(screening.severity_for(9), "Mild anxiety");
    assert_eq!(screening.severity_for(10), "Moderate anxiety");
    assert_eq!(screening.severity_for(14), "Moderate anxiety");
    assert_eq!(screening.severity_for(15), "Severe anxiety");
    assert_eq!(screening.severity_for(21), "Severe anxiety");
}

#[test]
fn ghq_band_boundaries() {
    let screening = get_screening(ScreeningKind::Ghq);
    assert_eq!(screening.severity_for(0), "Good general well-being");
    assert_eq!(screening.severity_for(2), "Good general well-being");
    assert_eq!(screening.severity_for(3), "Mild psychological distress");
    assert_eq!(screening.severity_for(6), "Mild psychological distress");
    assert_eq!(screening.severity_for(7), "Significant psychological distress");
    assert_eq!(screening.severity_for(36), "Significant psychological distress");
}

#[test]
fn scores_past_max_clamp_into_top_band() {
    for screening in all_screenings() {
        let top = screening.severity_for(screening.max_score()).to_string();
        assert_eq!(screening.severity_for(screening.max_score() + 10), top);
    }
}

#[test]
fn response_options_match_each_scale() {
    assert_eq!(
        get_screening(ScreeningKind::Phq9).response_options(),
        FREQUENCY_OPTIONS
    );
    assert_eq!(
        get_screening(ScreeningKind::Gad7).response_options(),
        FREQUENCY_OPTIONS
    );
    assert_eq!(
        get_screening(ScreeningKind::Ghq).response_options(),
        INTENSITY_OPTIONS
    );
}
