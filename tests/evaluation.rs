use ferrite_ff::data::linearly_separable;
use ferrite_ff::eval::{predict, predict_proba};
use ferrite_ff::{evaluate, train, Matrix, TrainConfig, TwoLayerNet};
use proptest::prelude::*;

#[test]
fn test_zero_weights_give_chance_accuracy() {
    let (features, _) = linearly_separable(40, 11);
    // balanced labels, independent of the features
    let targets: Vec<f64> = (0..40).map(|i| (i % 2) as f64).collect();
    let net = TwoLayerNet::zeros(2, 4);

    assert!(predict_proba(&net, &features).unwrap().iter().all(|&p| p == 0.5));
    assert_eq!(evaluate(&features, &targets, &net).unwrap(), 0.5);
}

#[test]
fn test_evaluation_does_not_touch_inputs() {
    let (features, targets) = linearly_separable(20, 1);
    let net = train(&features, &targets, TrainConfig::new(2, 5, 0.1, 1)).unwrap();
    let (features_before, targets_before, net_before) = (features.clone(), targets.clone(), net.clone());

    let first = evaluate(&features, &targets, &net).unwrap();
    let second = evaluate(&features, &targets, &net).unwrap();
    assert_eq!(first, second);
    assert_eq!(features, features_before);
    assert_eq!(targets, targets_before);
    assert_eq!(net, net_before);
}

fn arb_case() -> impl Strategy<Value = (TwoLayerNet, Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..4, 1usize..4, 1usize..30).prop_flat_map(|(n_features, n_hidden, n_samples)| {
        (
            prop::collection::vec(prop::collection::vec(-3.0f64..3.0, n_hidden), n_features),
            prop::collection::vec(-3.0f64..3.0, n_hidden),
            prop::collection::vec(prop::collection::vec(-5.0f64..5.0, n_features), n_samples),
            prop::collection::vec(prop::bool::ANY, n_samples),
        )
            .prop_map(|(w1, w2, features, labels)| {
                let net = TwoLayerNet::from_parts(Matrix::from_rows(w1).unwrap(), w2).unwrap();
                let targets = labels.into_iter().map(|b| if b { 1.0 } else { 0.0 }).collect();
                (net, features, targets)
            })
    })
}

proptest! {
    #[test]
    fn accuracy_is_order_independent(
        (case, order) in arb_case().prop_flat_map(|case| {
            let n = case.1.len();
            (Just(case), Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
        })
    ) {
        let (net, features, targets) = case;
        let shuffled_x: Vec<Vec<f64>> = order.iter().map(|&i| features[i].clone()).collect();
        let shuffled_y: Vec<f64> = order.iter().map(|&i| targets[i]).collect();

        let accuracy = evaluate(&features, &targets, &net).unwrap();
        prop_assert_eq!(accuracy, evaluate(&shuffled_x, &shuffled_y, &net).unwrap());
    }

    #[test]
    fn accuracy_is_fraction_of_matches((net, features, targets) in arb_case()) {
        let predictions = predict(&net, &features).unwrap();
        let matches = predictions.iter().zip(&targets).filter(|(p, y)| p == y).count();
        let accuracy = evaluate(&features, &targets, &net).unwrap();

        prop_assert!((0.0..=1.0).contains(&accuracy));
        prop_assert_eq!(accuracy, matches as f64 / targets.len() as f64);
    }
}
