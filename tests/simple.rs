use ringcut::{deviation, earcut, Earcut, EarcutConfig, EarcutError};

fn flat(points: &[[f64; 2]]) -> Vec<f64> {
    points.iter().flatten().copied().collect()
}

#[test]
fn test_empty() {
    let mut earcut = Earcut::new();
    let data: [f64; 0] = [];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    let report = earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles.len(), 0);
    assert!(report.is_complete());
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_invalid_point() {
    let mut earcut = Earcut::new();
    let data = [100.0, 200.0];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles.len(), 0);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_invalid_line() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 100.0, 200.0];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles.len(), 0);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_collinear_points() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 1.0, 0.0, 2.0, 0.0];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    let report = earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles.len(), 0);
    assert_eq!(report.triangles, 0);
}

#[test]
fn test_invalid_empty_hole() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0];
    let hole_indices: &[u32] = &[3];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles.len(), 3);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_steiner_point_hole() {
    let mut earcut = Earcut::new();
    let data = flat(&[[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [50.0, 30.0]]);
    let hole_indices: &[u32] = &[3];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![3, 0, 1, 2, 0, 3, 3, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_steiner_line_hole() {
    let mut earcut = Earcut::new();
    let data = flat(&[[0., 0.], [100., 0.], [100., 100.], [50., 30.], [60., 30.]]);
    let hole_indices: &[u32] = &[3];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles.len(), 5 * 3);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_square() {
    let mut earcut = Earcut::new();
    let data = flat(&[[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]);
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_square_u16() {
    let mut earcut = Earcut::new();
    let data = flat(&[[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]);
    let hole_indices: &[u16] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_square_usize() {
    let data = flat(&[[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]);
    let triangles = earcut(&data, &[], 2).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

#[test]
fn test_square_f32() {
    let data: [f32; 8] = [0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0];
    let triangles = earcut(&data, &[], 2).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn test_extra_dimensions_are_ignored() {
    let mut earcut = Earcut::new();
    let data = [
        0.0, 0.0, 1.0, 100.0, 0.0, 1.0, 100.0, 100.0, 1.0, 0.0, 100.0, 1.0,
    ];
    let hole_indices: &[usize] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 3, &mut triangles).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 3, &triangles), 0.0);
}

#[test]
fn test_square_with_square_hole() {
    let mut earcut = Earcut::new();
    let data = flat(&[
        [0.0, 0.0],
        [100.0, 0.0],
        [100.0, 100.0],
        [0.0, 100.0],
        [10.0, 10.0],
        [90.0, 10.0],
        [90.0, 90.0],
        [10.0, 90.0],
    ]);
    let hole_indices: &[u32] = &[4];
    let mut triangles = vec![];
    let report = earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(
        triangles,
        vec![0, 4, 7, 5, 4, 0, 3, 0, 7, 5, 0, 1, 2, 3, 7, 6, 5, 1, 2, 7, 6, 6, 1, 2]
    );
    assert_eq!(report.triangles, 8);
    assert!(report.is_complete());
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

fn triangles_area(data: &[f64], triangles: &[usize]) -> f64 {
    triangles
        .chunks_exact(3)
        .map(|t| {
            let [a, b, c] = [t[0], t[1], t[2]].map(|i| [data[i * 2], data[i * 2 + 1]]);
            ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
        })
        .sum()
}

#[test]
fn test_unit_square_area() {
    let data = [0., 0., 4., 0., 4., 4., 0., 4.];
    let triangles = earcut(&data, &[], 2).unwrap();
    assert_eq!(triangles.len(), 2 * 3);
    assert_eq!(triangles_area(&data, &triangles), 16.0);
}

#[test]
fn test_unit_square_with_hole_area() {
    let data = [
        0., 0., 4., 0., 4., 4., 0., 4., 1., 1., 3., 1., 3., 3., 1., 3.,
    ];
    let triangles = earcut(&data, &[4], 2).unwrap();
    assert_eq!(triangles.len(), 8 * 3);
    assert_eq!(triangles_area(&data, &triangles), 12.0);
}

#[test]
fn test_winding_does_not_matter() {
    let ccw = [0., 0., 4., 0., 4., 4., 0., 4.];
    let cw = [0., 4., 4., 4., 4., 0., 0., 0.];
    let a = earcut(&ccw, &[], 2).unwrap();
    let b = earcut(&cw, &[], 2).unwrap();
    assert_eq!(a.len(), b.len());
    assert_eq!(triangles_area(&ccw, &a), triangles_area(&cw, &b));
}

#[test]
fn test_triangle_count_with_two_holes() {
    let data = flat(&[
        [0., 0.],
        [10., 0.],
        [10., 10.],
        [0., 10.],
        [1., 1.],
        [3., 1.],
        [3., 3.],
        [1., 3.],
        [6., 6.],
        [8., 6.],
        [8., 8.],
        [6., 8.],
    ]);
    let triangles = earcut(&data, &[4, 8], 2).unwrap();
    // n + 2h + sum(k) - 2
    assert_eq!(triangles.len() / 3, 4 + 2 * 2 + 8 - 2);
    assert!(triangles.iter().all(|&i| i < 12));
    assert_eq!(deviation(&data, &[4, 8], 2, &triangles), 0.0);
}

#[test]
fn test_u_shape() {
    let data = flat(&[
        [0., 0.],
        [3., 0.],
        [3., 3.],
        [2., 3.],
        [2., 1.],
        [1., 1.],
        [1., 3.],
        [0., 3.],
    ]);
    let triangles = earcut(&data, &[], 2).unwrap();
    assert_eq!(triangles.len() / 3, 6);
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

#[test]
fn test_unreachable_hole_is_reported() {
    let mut earcut = Earcut::new();
    let data = flat(&[
        [10., 0.],
        [14., 0.],
        [14., 4.],
        [10., 4.],
        [1., 1.],
        [3., 1.],
        [3., 3.],
        [1., 3.],
    ]);
    let mut triangles: Vec<u32> = vec![];
    let report = earcut.earcut(&data, &[4], 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(report.unmerged_holes, 1);
    assert!(!report.is_complete());
}

fn star(points: usize, outer: f64, inner: f64) -> Vec<f64> {
    (0..points)
        .flat_map(|k| {
            let r = if k % 2 == 0 { outer } else { inner };
            let a = std::f64::consts::TAU * k as f64 / points as f64;
            [r * a.cos(), r * a.sin()]
        })
        .collect()
}

#[test]
fn test_star() {
    let data = star(60, 10., 5.);
    let triangles = earcut(&data, &[], 2).unwrap();
    assert_eq!(triangles.len() / 3, 58);
    assert!(deviation(&data, &[], 2, &triangles) < 1e-12);
}

#[test]
fn test_hashed_matches_scan() {
    // enough vertices to switch on the z-order index
    let mut data = star(200, 100., 60.);
    data.extend(star(24, 20., 10.));

    let mut hashed = vec![];
    let report = Earcut::new()
        .earcut(&data, &[200usize], 2, &mut hashed)
        .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.triangles, 200 + 2 + 24 - 2);
    assert!(deviation(&data, &[200], 2, &hashed) < 1e-10);

    let scan_only = EarcutConfig::default().with_hash_threshold(usize::MAX);
    let mut scanned = vec![];
    Earcut::with_config(scan_only)
        .earcut(&data, &[200usize], 2, &mut scanned)
        .unwrap();
    assert_eq!(hashed, scanned);
}

#[test]
fn test_reuse_instance() {
    let mut earcut = Earcut::new();
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];

    let star_data = star(40, 10., 5.);
    earcut.earcut(&star_data, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles.len() / 3, 38);

    let square = [0., 0., 4., 0., 4., 4., 0., 4.];
    earcut.earcut(&square, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn test_invalid_input() {
    let mut earcut = Earcut::new();
    let mut triangles: Vec<u32> = vec![];
    assert_eq!(
        earcut.earcut(&[0., 0., 1.], &[], 2, &mut triangles),
        Err(EarcutError::UnalignedData { len: 3, dim: 2 })
    );
    assert_eq!(
        earcut.earcut(&[0., 0., 1., 0., 0., 1.], &[4], 2, &mut triangles),
        Err(EarcutError::HoleIndexOutOfRange {
            index: 4,
            vertices: 3
        })
    );
    assert_eq!(
        earcut.earcut(&[0., 0., 1., 0., 0., 1.], &[], 0, &mut triangles),
        Err(EarcutError::InvalidDimensions(0))
    );
}

#[test]
fn test_unvalidated_input_is_clamped() {
    let config = EarcutConfig::default().with_validation(false);
    let mut earcut = Earcut::with_config(config);
    let mut triangles: Vec<u32> = vec![];
    let data = [0., 0., 4., 0., 4., 4., 0., 4., 9.];
    earcut.earcut(&data, &[7], 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

// an S drawn as one ring whose arms overlap, so no ear survives the filter and
// cure passes and the ring has to be split
const S_RING: [f64; 24] = [
    0., 0., 4., 0., 4., 1., 1., 1., 1., 2., 4., 2., 4., 3., 0., 3., 0., 2., 3., 2., 3., 1., 0.,
    1.,
];

#[test]
fn test_split_overlapping_ring() {
    let mut earcut = Earcut::new();
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    let report = earcut.earcut(&S_RING, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![11, 0, 1, 5, 6, 7, 4, 5, 7, 7, 8, 4, 3, 4, 8]);
    assert_eq!(report.triangles, 5);
    // one half of the split still has no ear nor diagonal
    assert_eq!(report.residual_vertices, 7);
    assert_eq!(report.unmerged_holes, 0);
    assert!(!report.is_complete());
}

#[test]
fn test_split_depth_limit() {
    let config = EarcutConfig::default().with_max_split_depth(0);
    let mut earcut = Earcut::with_config(config);
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![0, 1, 2];
    assert_eq!(
        earcut.earcut(&S_RING, hole_indices, 2, &mut triangles),
        Err(EarcutError::SplitDepthExceeded(0))
    );
    // no partial output survives the error
    assert!(triangles.is_empty());

    // the instance is still usable afterwards
    let square = [0., 0., 4., 0., 4., 4., 0., 4.];
    earcut.earcut(&square, hole_indices, 2, &mut triangles).unwrap();
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn test_cure_local_intersection() {
    // edge 0 -> 1 ends on edge 4 -> 5, two steps along the ring
    let data = flat(&[[0., 3.], [1., 2.], [3., 4.], [3., 0.], [0., 2.], [2., 2.]]);
    let mut earcut = Earcut::new();
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    let report = earcut.earcut(&data, hole_indices, 2, &mut triangles).unwrap();
    // the first triangle comes from the cure pass, the rest are ears
    assert_eq!(triangles, vec![1, 0, 4, 1, 4, 3, 3, 2, 1]);
    assert_eq!(report.triangles, 3);
    assert!(report.is_complete());
}

#[test]
fn test_u16_index_overflow_is_rejected() {
    let data = vec![0.0f64; 2 * (u16::MAX as usize + 2)];
    let mut earcut = Earcut::new();
    let hole_indices: &[u16] = &[];
    let mut triangles = vec![];
    assert_eq!(
        earcut.earcut(&data, hole_indices, 2, &mut triangles),
        Err(EarcutError::TooManyVertices {
            vertices: 65537,
            max: 65535
        })
    );
}
