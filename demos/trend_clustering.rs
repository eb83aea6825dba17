//! Trend Clustering Example
//!
//! Demonstrates elastic sequence distances and exemplar-based clustering
//! of trend lines with different lengths.
//!
//! Run with: cargo run --example trend_clustering

use trendy::clustering::Trendy;
use trendy::distance::{dtw_distance, fastdtw_distance, levenshtein_str, SeqDistance};

fn main() {
    println!("=== Trend Clustering Example ===\n");

    // =========================================================================
    // Elastic Distances
    // =========================================================================
    println!("--- DTW Distance ---\n");

    let rising = vec![1.0, 2.0, 3.0, 4.0];
    let rising_long = vec![1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];
    let flat = vec![0.0, 0.0, 0.0];

    println!("Rising:      {:?}", rising);
    println!("Rising long: {:?} (same trend, more samples)", rising_long);
    println!("Flat:        {:?}", flat);
    println!();

    println!(
        "  dtw(rising, rising)      = {:.2}",
        dtw_distance(&rising, &rising)
    );
    println!(
        "  dtw(rising, rising_long) = {:.2} (elastic alignment absorbs the stretch)",
        dtw_distance(&rising, &rising_long)
    );
    println!(
        "  dtw(rising, flat)        = {:.2}",
        dtw_distance(&rising, &flat)
    );
    println!(
        "  fastdtw(rising, flat)    = {:.2} (approximate, linear memory)",
        fastdtw_distance(&rising, &flat)
    );

    println!("\n--- Levenshtein Distance ---\n");
    println!(
        "  levenshtein(\"Apple Inc.\", \"apple inc\") = {}",
        levenshtein_str("Apple Inc.", "apple inc")
    );

    // =========================================================================
    // Clustering Trends
    // =========================================================================
    println!("\n--- Exemplar Clustering ---\n");

    let series = vec![
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![1.0, 2.1, 2.9, 4.4, 5.1],
        vec![6.2, 5.0, 4.0, 3.0, 2.0],
        vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
    ];

    println!("4 trends: two rising, two falling (unequal lengths).\n");

    let mut model = Trendy::new(2).expect("valid cluster count");
    let labels = model.fit_predict(&series).expect("fit succeeds");

    for (i, (s, label)) in series.iter().zip(&labels).enumerate() {
        println!("  Series {} -> cluster {}  {:?}", i, label, s);
    }

    println!("\nCluster sizes: {:?}", model.cluster_sizes().unwrap());
    println!("Centers are actual input sequences (exemplars):");
    for (i, center) in model.cluster_centers().unwrap().iter().enumerate() {
        println!("  Cluster {}: {:?}", i, center);
    }

    // =========================================================================
    // Classifying New Trends
    // =========================================================================
    println!("\n--- Predict ---\n");

    let queries = vec![
        vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5],
        vec![8.0, 6.0, 4.0, 2.0],
    ];
    let assigned = model.predict(&queries).expect("predict after fit");

    for (q, label) in queries.iter().zip(&assigned) {
        println!("  {:?} -> cluster {}", q, label);
    }

    // =========================================================================
    // Persistence
    // =========================================================================
    println!("\n--- Snapshot Persistence ---\n");

    let path = std::env::temp_dir().join("trendy_demo.snapshot");
    model.save(&path).expect("save snapshot");
    let restored = Trendy::<Vec<f64>>::load(&path).expect("load snapshot");

    println!(
        "Restored estimator predicts identically: {:?}",
        restored.predict(&queries).expect("predict after restore")
    );

    // =========================================================================
    // Alternative Algorithms
    // =========================================================================
    println!("\n--- Alternative Algorithms ---\n");

    let mut scaled_model =
        Trendy::with_algorithm(2, SeqDistance::dtw_scaled()).expect("valid cluster count");
    let magnitudes = vec![
        vec![1.0, 2.0, 3.0, 4.0],
        vec![100.0, 200.0, 300.0, 400.0],
        vec![4.0, 3.0, 2.0, 1.0],
        vec![400.0, 300.0, 200.0, 100.0],
    ];
    let shape_labels = scaled_model.fit_predict(&magnitudes).expect("fit succeeds");
    println!(
        "Scaled DTW clusters by shape, ignoring magnitude: {:?}",
        shape_labels
    );

    let mut name_model =
        Trendy::with_algorithm(2, SeqDistance::levenshtein()).expect("valid cluster count");
    let names: Vec<String> = ["Apple Inc.", "apple inc", "Microsoft Corp.", "microsoft corp"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let name_labels = name_model.fit_predict(&names).expect("fit succeeds");
    println!("Levenshtein clusters strings the same way: {:?}", name_labels);
}
