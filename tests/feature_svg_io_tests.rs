#![cfg(feature = "svg-io")]

use planet_dance::{
    chords::{ChordExtent, ChordSet},
    config::GeneratorConfig,
    correspondence::{Correspondence, DanceAndEpicycloid, KnotFamilies, KnotSampleDance},
    io::svg::{SvgRenderer, write_svg},
    render::Palette,
    traits::{ColorChooser, Renderer},
    torus::{SamplePointSet, StrandFamily},
};

fn small_config() -> GeneratorConfig {
    GeneratorConfig::default().with_dance_resolution(300)
}

#[test]
fn correspondence_to_svg() {
    let config = small_config();
    let view = Correspondence::build(5, 2, 41, &config).unwrap();
    let svg = view.to_svg(&config, &mut Palette::default()).to_string();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("MMT(203, 41)"));
    assert!(svg.contains("Linear Loops on Torus (5, 2) and (1, 41)"));
    assert!(svg.contains("Epicycloid"));
    // One marker per sample.
    assert_eq!(svg.matches("<circle").count(), 203 + 2);
    assert!(svg.contains("<polyline"));
}

#[test]
fn colors_come_from_the_chooser() {
    let config = small_config();
    let view = Correspondence::build(5, 2, 41, &config).unwrap();
    let mut calls = 0;
    let mut chooser = || {
        calls += 1;
        "#123456".to_string()
    };
    let svg = view.to_svg(&config, &mut chooser).to_string();
    assert_eq!(calls, 3);
    assert!(svg.contains("#123456"));
}

#[test]
fn extended_dance_uses_the_viewport() {
    let config = small_config();
    let scene = DanceAndEpicycloid::build(-3, 2, &config).unwrap();
    let svg = scene.to_svg(&config, &mut Palette::default()).to_string();
    assert!(svg.contains("viewBox=\"-10 -10 20 20\""));
    assert!(svg.contains("Planet Dance (-3, 2)"));
}

#[test]
fn knot_dance_to_svg() {
    let config = small_config();
    let scene = KnotSampleDance::build(34, 1, 100, &config).unwrap();
    let svg = scene.to_svg(&config, &mut Palette::default()).to_string();
    assert!(svg.contains("S(34, 1, 100)"));
    assert!(svg.contains("<rect"));
    assert_eq!(svg.matches("<circle").count(), 100 + 1);
}

#[test]
fn modular_table_to_svg() {
    let table = ChordSet::modular(512, 43).unwrap();
    let svg = table.to_svg(ChordExtent::Bounded, &small_config()).to_string();
    assert!(svg.contains("MMT(512, 43)"));
    assert!(svg.contains("stroke-opacity=\"1\""));
}

#[test]
fn knot_families_prefer_their_own_colors() {
    let scene = KnotFamilies::build(&[(1, 1), (1, 3), (41, 1)], Some((2, 366)), &small_config()).unwrap();
    let mut calls = 0;
    let mut chooser = || {
        calls += 1;
        "#abcdef".to_string()
    };
    let knot_colors = [Some("gray".to_string()), None, Some("orange".to_string())];
    let svg = scene.to_svg(&knot_colors, &mut chooser).to_string();

    assert_eq!(calls, 1);
    for color in ["stroke=\"gray\"", "stroke=\"#abcdef\"", "stroke=\"orange\""] {
        assert!(svg.contains(color), "missing {color}");
    }
    assert!(svg.contains("Linear Loops on Torus (1, 1), (1, 3), (41, 1)"));
    assert_eq!(svg.matches("<path").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 366);

    // Knots past the end of the color list fall back to the chooser.
    let unsampled = KnotFamilies::build(&[(3, 2), (2, 5)], None, &small_config()).unwrap();
    let svg = unsampled.to_svg(&[], &mut Palette::new(["teal"])).to_string();
    assert_eq!(svg.matches("stroke=\"teal\"").count(), 2);
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn single_panel_renderer() {
    let mut renderer = SvgRenderer::for_torus().with_title("knots");
    let mut palette = Palette::default();
    renderer.draw_strands(&StrandFamily::generate(1, 1).unwrap(), &palette.next_color());
    renderer.draw_strands(&StrandFamily::generate(1, 3).unwrap(), &palette.next_color());
    renderer.draw_strands(&StrandFamily::generate(41, 1).unwrap(), &palette.next_color());
    renderer.draw_samples(&SamplePointSet::generate(41, 1, 366).unwrap(), "black");
    let svg = renderer.finish().to_string();

    // The square outline is drawn once however many families are added.
    assert_eq!(svg.matches("<rect").count(), 1);
    assert_eq!(svg.matches("<path").count(), 3);
    assert!(svg.contains("aria-label=\"knots\""));
}

#[test]
fn write_to_buffer() -> Result<(), Box<dyn std::error::Error>> {
    let config = small_config();
    let view = Correspondence::build(2, 3, 34, &config)?;
    let document = view.to_svg(&config, &mut Palette::default());
    let mut buffer = Vec::new();
    write_svg(&document, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.contains("MMT(65, 34)"));
    Ok(())
}
