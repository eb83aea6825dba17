//! End-to-end scenarios for the cluster estimator.

use trendy::clustering::Trendy;
use trendy::distance::{dtw_distance, levenshtein_str, SeqDistance};
use trendy::TrendyError;

/// Four short price-like trends: two rising, two falling.
fn trend_data() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![1.0, 2.1, 2.9, 4.4, 5.1],
        vec![6.2, 5.0, 4.0, 3.0, 2.0],
        vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
    ]
}

#[test]
fn default_estimator_separates_rising_from_falling() {
    let data = trend_data();

    let mut model = Trendy::new(2).unwrap();
    model.fit(&data).unwrap();

    assert_eq!(model.labels(), Some(&[0, 0, 1, 1][..]));
    assert_eq!(model.cluster_sizes(), Some(vec![2, 2]));
}

#[test]
fn fit_predict_matches_fit_on_same_input() {
    let data = trend_data();

    let mut model = Trendy::new(2).unwrap();
    let labels = model.fit_predict(&data).unwrap();

    assert_eq!(labels, vec![0, 0, 1, 1]);
    assert_eq!(model.labels(), Some(labels.as_slice()));
}

#[test]
fn predict_routes_new_trends_to_the_right_cluster() {
    let data = trend_data();

    let mut model = Trendy::new(2).unwrap();
    model.fit(&data).unwrap();

    // A new rising trend and a new falling one, lengths unseen in training
    let queries = vec![
        vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5],
        vec![8.0, 6.0, 4.0, 2.0],
    ];

    assert_eq!(model.predict(&queries).unwrap(), vec![0, 1]);
    assert_eq!(model.assign(&queries).unwrap(), vec![0, 1]);
}

#[test]
fn exact_dtw_estimator_agrees_on_the_scenario() {
    let data = trend_data();

    let mut model = Trendy::with_algorithm(2, SeqDistance::dtw()).unwrap();
    assert_eq!(model.fit_predict(&data).unwrap(), vec![0, 0, 1, 1]);
}

#[test]
fn scaled_dtw_groups_by_shape_not_magnitude() {
    // Same two shapes at very different magnitudes
    let data = vec![
        vec![1.0, 2.0, 3.0, 4.0],
        vec![100.0, 200.0, 300.0, 400.0],
        vec![4.0, 3.0, 2.0, 1.0],
        vec![400.0, 300.0, 200.0, 100.0],
    ];

    let mut model = Trendy::with_algorithm(2, SeqDistance::dtw_scaled()).unwrap();
    model.fit(&data).unwrap();

    let labels = model.labels().unwrap();
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[2], labels[3]);
    assert_ne!(labels[0], labels[2]);
}

#[test]
fn string_estimator_clusters_company_names() {
    let names: Vec<String> = [
        "Apple Inc.",
        "apple inc",
        "Microsoft Corp.",
        "microsoft corp",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(levenshtein_str("Apple Inc.", "apple inc"), 3);

    let mut model = Trendy::with_algorithm(2, SeqDistance::levenshtein()).unwrap();
    model.fit(&names).unwrap();

    assert_eq!(model.labels(), Some(&[0, 0, 1, 1][..]));
}

#[test]
fn custom_closure_algorithm_is_accepted() {
    // DTW over squared elementwise cost, injected as a plain closure
    let dist = SeqDistance::custom(|a: &Vec<f64>, b: &Vec<f64>| {
        Ok(trendy::distance::dtw_distance_with(a, b, |x, y| {
            (x - y) * (x - y)
        }))
    });

    let mut model = Trendy::with_algorithm(2, dist).unwrap();
    let labels = model.fit_predict(&trend_data()).unwrap();

    assert_eq!(labels, vec![0, 0, 1, 1]);
}

#[test]
fn snapshot_survives_a_process_boundary() {
    let data = trend_data();

    let mut model = Trendy::new(2).unwrap();
    model.fit(&data).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trends.trendy");
    model.save(&path).unwrap();

    let restored = Trendy::<Vec<f64>>::load(&path).unwrap();

    assert_eq!(restored.labels(), model.labels());
    assert_eq!(restored.cluster_centers(), model.cluster_centers());

    let queries = vec![vec![2.0, 3.0, 4.0, 5.0], vec![5.0, 4.0, 3.0, 2.0]];
    assert_eq!(
        restored.predict(&queries).unwrap(),
        model.predict(&queries).unwrap()
    );
}

#[test]
fn error_paths_are_explicit() {
    // Too few clusters
    assert!(matches!(
        Trendy::new(1),
        Err(TrendyError::InvalidParameter(_))
    ));

    // Predict before fit
    let model = Trendy::new(2).unwrap();
    assert_eq!(
        model.predict(&[vec![1.0, 2.0]]),
        Err(TrendyError::FitRequired)
    );

    // Fewer sequences than clusters
    let mut model = Trendy::new(3).unwrap();
    assert_eq!(
        model.fit(&[vec![1.0], vec![2.0]]),
        Err(TrendyError::InsufficientData { needed: 3, got: 2 })
    );
}

#[test]
fn centers_are_verbatim_input_sequences() {
    let data = trend_data();

    let mut model = Trendy::with_algorithm(2, SeqDistance::dtw()).unwrap();
    model.fit(&data).unwrap();

    for center in model.cluster_centers().unwrap() {
        assert!(data.iter().any(|s| s == center));
        // And the center is an exemplar: distance zero to its original
        let original = data.iter().find(|s| *s == center).unwrap();
        assert_eq!(dtw_distance(center, original), 0.0);
    }
}
