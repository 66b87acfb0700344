use planet_dance::{
    chords::{ChordExtent, ChordSet},
    config::{AxisConvention, GeneratorConfig},
    correspondence::{self, Correspondence, CorrespondenceBundle, DanceAndEpicycloid, KnotFamilies, KnotSampleDance},
    epicycloid::Epicycloid,
    errors::GeneratorError,
    float_types::{MAX_SAMPLES, PERIOD},
    render::GeometryRenderer,
    torus::{SamplePointSet, StrandFamily},
    traits::Renderer,
};

#[test]
fn five_two_forty_one() {
    let config = GeneratorConfig::default();
    let view = Correspondence::build(5, 2, 41, &config).unwrap();

    assert_eq!(
        view.bundle,
        CorrespondenceBundle { alpha: 5, beta: 2, mult: 41, reduced_a: 5, reduced_b: 2, sample_rate: 203 }
    );
    assert_eq!(view.modular_table, ChordSet::generate(1, 41, 203).unwrap());
    assert_eq!(view.dance, ChordSet::generate(5, 2, 3000).unwrap());
    assert_eq!(view.dance_extent, ChordExtent::Bounded);
    assert_eq!(view.epicycloid, Epicycloid::new(5, 2).unwrap());
    assert_eq!(view.epicycloid.period, PERIOD);
    assert_eq!(view.knot, StrandFamily::generate(5, 2).unwrap());
    assert_eq!(view.multiplier_knot, StrandFamily::generate(1, 41).unwrap());
    assert_eq!(view.samples, SamplePointSet::generate(1, 41, 203).unwrap());
}

#[test]
fn shared_sample_rate() {
    let config = GeneratorConfig::default();
    for &(alpha, beta, mult) in &[(5, 2, 41), (-4, 3, 50), (2, 3, 34), (4, 2, 50), (6, 3, 50)] {
        let view = Correspondence::build(alpha, beta, mult, &config).unwrap();
        let rate = (alpha * mult - beta).abs();
        assert_eq!(view.bundle.sample_rate, rate);
        assert_eq!(view.modular_table.len() as i64, rate);
        assert_eq!(view.samples.len() as i64, rate);
    }
}

#[test]
fn parameters_are_reduced_but_rate_is_not() {
    let view = Correspondence::build(6, 3, 50, &GeneratorConfig::default()).unwrap();
    assert_eq!((view.bundle.reduced_a, view.bundle.reduced_b), (2, 1));
    assert_eq!(view.bundle.sample_rate, 297);
    assert_eq!((view.dance.a, view.dance.b), (2, 1));
    assert_eq!((view.knot.a, view.knot.b), (2, 1));
    assert_eq!((view.epicycloid.a, view.epicycloid.b), (2, 1));
}

#[test]
fn opposite_signs_extend_the_dance() {
    let view = Correspondence::build(-4, 3, 50, &GeneratorConfig::default()).unwrap();
    assert_eq!(view.dance_extent, ChordExtent::Extended);
    assert_eq!(view.bundle.sample_rate, 203);
}

#[test]
fn transposed_convention_uses_the_mult_one_strand() {
    let config = GeneratorConfig::default().with_convention(AxisConvention::Transposed);
    let view = Correspondence::build(5, 2, 41, &config).unwrap();
    assert_eq!((view.multiplier_knot.a, view.multiplier_knot.b), (41, 1));
    let expected = SamplePointSet::generate_with(41, 1, 203, AxisConvention::Transposed, MAX_SAMPLES).unwrap();
    assert_eq!(view.samples, expected);
    // Swapping both the axes and the multiplier rates puts the stops back in place.
    let standard = Correspondence::build(5, 2, 41, &GeneratorConfig::default()).unwrap();
    assert_eq!(standard.samples.points, view.samples.points);
    // The knot itself is mirrored.
    for (s, t) in standard.knot.anchors.iter().zip(view.knot.anchors.iter()) {
        assert_eq!((s.x, s.y), (t.y, t.x));
    }
}

#[test]
fn invalid_inputs_fail_fast() {
    let config = GeneratorConfig::default();
    assert_eq!(
        Correspondence::build(0, 0, 41, &config),
        Err(GeneratorError::InvalidKnotParameters { alpha: 0, beta: 0 })
    );
    // alpha·mult == beta leaves nothing to sample.
    assert_eq!(
        Correspondence::build(1, 41, 41, &config),
        Err(GeneratorError::InvalidSampleRate(0))
    );
    // beta == 0 reduces to (1, 0) and the epicycloid has no ratio.
    assert!(matches!(
        Correspondence::build(3, 0, 2, &config),
        Err(GeneratorError::DivisionByZero { .. })
    ));
    assert!(matches!(
        Correspondence::build(i64::MAX, 1, 2, &config),
        Err(GeneratorError::ArithmeticOverflow(_))
    ));
    let bad = GeneratorConfig::default().with_step(-0.1);
    assert!(matches!(Correspondence::build(5, 2, 41, &bad), Err(GeneratorError::InvalidInterval { .. })));
}

#[test]
fn zero_multiplier_still_builds() {
    let view = Correspondence::build(5, 2, 0, &GeneratorConfig::default()).unwrap();
    assert_eq!(view.bundle.sample_rate, 2);
    assert_eq!((view.multiplier_knot.a, view.multiplier_knot.b), (1, 0));
    assert!(view.modular_table.iter().all(|chord| chord.theta1 == 0.0));
}

#[test]
fn bundle_helpers() {
    assert_eq!(correspondence::reduce(4, 2), Ok((2, 1)));
    assert_eq!(correspondence::sample_rate(2, 3, 34), Ok(65));
    assert_eq!(
        CorrespondenceBundle::new(0, 0, 3),
        Err(GeneratorError::InvalidKnotParameters { alpha: 0, beta: 0 })
    );
}

#[test]
fn knot_and_sampled_dance_share_the_rate() {
    let config = GeneratorConfig::default();
    let scene = KnotSampleDance::build(34, 1, 100, &config).unwrap();
    assert_eq!(scene.samples.len(), 100);
    assert_eq!(scene.dance.len(), 100);
    assert_eq!(scene.dance, ChordSet::generate(34, 1, 100).unwrap());
    assert_eq!(scene.knot.anchors.len(), 2 * 35);

    let reduced = KnotSampleDance::build(68, 2, 10, &config).unwrap();
    assert_eq!((reduced.reduced_a, reduced.reduced_b), (34, 1));
    assert!(KnotSampleDance::build(3, 2, 0, &config).is_err());
}

#[test]
fn dance_beside_epicycloid() {
    let config = GeneratorConfig::default();
    let scene = DanceAndEpicycloid::build(-3, 2, &config).unwrap();
    assert_eq!(scene.dance.len(), 3000);
    assert_eq!(scene.dance_extent, ChordExtent::Extended);
    assert_eq!(scene.epicycloid.len(), 629);

    let scene = DanceAndEpicycloid::build(8, 6, &config.clone().with_dance_resolution(500)).unwrap();
    assert_eq!((scene.reduced_a, scene.reduced_b), (4, 3));
    assert_eq!(scene.dance.len(), 500);
}

#[test]
fn knot_families_sample_the_chosen_knot() {
    let config = GeneratorConfig::default();
    let knots = [(1, 1), (1, 3), (41, 1)];
    let scene = KnotFamilies::build(&knots, Some((2, 366)), &config).unwrap();
    assert_eq!(scene.families.len(), 3);
    for (family, &(a, b)) in scene.families.iter().zip(&knots) {
        assert_eq!(*family, StrandFamily::generate(a, b).unwrap());
    }
    assert_eq!(scene.sampled, Some(2));
    assert_eq!(scene.samples, Some(SamplePointSet::generate(41, 1, 366).unwrap()));

    let plain = KnotFamilies::build(&knots, None, &config).unwrap();
    assert_eq!((plain.sampled, plain.samples), (None, None));

    // Rates are drawn as given.
    let doubled = KnotFamilies::build(&[(2, 4)], None, &config).unwrap();
    assert_eq!((doubled.families[0].a, doubled.families[0].b), (2, 4));
}

#[test]
fn knot_families_reject_bad_input() {
    let config = GeneratorConfig::default();
    assert_eq!(
        KnotFamilies::build(&[(1, 1), (1, 3)], Some((2, 10)), &config),
        Err(GeneratorError::InvalidKnotIndex { index: 2, count: 2 })
    );
    assert_eq!(
        KnotFamilies::build(&[], Some((0, 10)), &config),
        Err(GeneratorError::InvalidKnotIndex { index: 0, count: 0 })
    );
    assert_eq!(
        KnotFamilies::build(&[(1, 1)], Some((0, 0)), &config),
        Err(GeneratorError::InvalidSampleRate(0))
    );
    assert_eq!(
        KnotFamilies::build(&[(1, 1), (0, 0)], None, &config),
        Err(GeneratorError::DegenerateSlope)
    );
}

#[test]
fn correspondence_renders_to_geometry() {
    let config = GeneratorConfig::default().with_dance_resolution(200);
    let view = Correspondence::build(5, 2, 41, &config).unwrap();

    let mut renderer = GeometryRenderer::new();
    renderer.draw_chords(&view.modular_table, ChordExtent::Bounded, config.chord_phase, config.extended_viewport);
    renderer.draw_samples(&view.samples, "black");
    renderer.draw_curve(&view.epicycloid, "purple");
    let geometry = renderer.finish();

    let chords = view.modular_table.non_degenerate().count();
    assert_eq!(geometry.0.len(), chords + 203 + 1);
}

#[test]
fn repeated_builds_are_identical() {
    let config = GeneratorConfig::default();
    assert_eq!(
        Correspondence::build(2, 3, 34, &config),
        Correspondence::build(2, 3, 34, &config)
    );
}
