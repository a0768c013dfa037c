use std::f64::consts::PI;

use equal_area_tessellation::{
    profile::{band_particle_numbers, Exponential, RadialProfile},
    render::SvgRenderer,
    tessellate_all, Disk, Hemisphere, Tessellation, TessellationParams,
};
use float_cmp::assert_approx_eq;
use rand::prelude::*;
use rand::rngs::StdRng;

#[macro_export]
macro_rules! log_time {
    ($msg:expr, $x:expr) => {{
        let t0 = std::time::Instant::now();
        let _result = $x;
        let t1 = std::time::Instant::now();
        let dt = t1 - t0;
        println!("{}: {:?}", $msg, dt);
        _result
    }};
}

fn random_params(count: usize, rng: &mut StdRng) -> Vec<TessellationParams> {
    (0..count)
        .map(|_| {
            TessellationParams::new(
                rng.gen_range(0.1..5.),
                rng.gen_range(10..5000),
                rng.gen_range(0.5..=4.),
            )
        })
        .collect()
}

#[test]
fn test_batch_of_disks() {
    let mut rng = StdRng::seed_from_u64(2);
    let params = random_params(500, &mut rng);

    let disks = log_time!("tessellate_all::<Disk>", tessellate_all::<Disk>(&params));
    assert_eq!(disks.len(), params.len());
    for (disk, params) in disks.iter().zip(params.iter()) {
        let disk = disk.as_ref().unwrap();
        assert_eq!(disk.patch_number(), params.n_patches);
        assert_eq!(disk.radius(), params.radius);
        let area = PI * params.radius * params.radius / params.n_patches as f64;
        for annulus in disk.sorted_bands() {
            assert_approx_eq!(f64, annulus.patch_area(), area, epsilon = 1e-9 * area);
        }
    }
}

#[test]
fn test_batch_of_hemispheres() {
    let mut rng = StdRng::seed_from_u64(3);
    let params = random_params(500, &mut rng);

    let hemispheres = log_time!(
        "tessellate_all::<Hemisphere>",
        tessellate_all::<Hemisphere>(&params)
    );
    for (hemisphere, params) in hemispheres.iter().zip(params.iter()) {
        let hemisphere = hemisphere.as_ref().unwrap();
        assert_eq!(hemisphere.patch_number(), params.n_patches);
        let counts = hemisphere.cumulative_patch_counts();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[counts.len() - 1], params.n_patches);
    }
}

#[test]
fn test_particles_per_annulus() {
    let disk = Disk::build(Exponential.r90(), 288, 1.).unwrap();
    let bands = disk.sorted_bands();
    let numbers = band_particle_numbers(&Exponential, 100_000, &bands).unwrap();
    assert_eq!(numbers.len(), bands.len());
    let total: u32 = numbers.iter().sum();
    assert!((total as f64 - 90_000.).abs() <= bands.len() as f64);
}

#[test]
fn test_render_config() {
    let params: TessellationParams =
        serde_json::from_str(r#"{"radius": 2.0, "n_patches": 145, "patch_aspect": 1.0}"#).unwrap();
    let hemisphere = Hemisphere::from_params(&params).unwrap();
    let mut svg = vec![];
    SvgRenderer {
        size: 256.,
        ..Default::default()
    }
    .write_hemisphere(&hemisphere, &mut svg)
    .unwrap();
    let svg = String::from_utf8(svg).unwrap();
    assert!(svg.contains(r#"width="256""#));
    assert_eq!(svg.matches("<circle").count(), hemisphere.zones().len());
}
