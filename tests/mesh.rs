use hemesh2::geometry::Point2;
use hemesh2::mesh::{Mesh, MeshError};

/// 3x3 unit grid, 9 points and 8 triangles:
///
///  6 --- 7 --- 8
///  | \ 5 | \ 7 |
///  | 4 \ | 6 \ |
///  3 --- 4 --- 5
///  | \ 1 | \ 3 |
///  | 0 \ | 2 \ |
///  0 --- 1 --- 2
fn grid_points() -> Vec<Point2<f64>> {
    [
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (2.0, 1.0),
        (0.0, 2.0),
        (1.0, 2.0),
        (2.0, 2.0),
    ]
    .into_iter()
    .map(Point2::from)
    .collect()
}

fn grid_triangles() -> Vec<[usize; 3]> {
    vec![
        [0, 1, 3],
        [1, 4, 3],
        [1, 2, 4],
        [2, 5, 4],
        [3, 4, 6],
        [4, 7, 6],
        [4, 5, 7],
        [5, 8, 7],
    ]
}

fn grid() -> Mesh<f64> {
    Mesh::from_arrays(&grid_points(), &grid_triangles()).unwrap()
}

#[test]
fn arena_sizes_match_input() {
    let mesh = grid();
    assert_eq!(mesh.vertices.len(), 9);
    assert_eq!(mesh.faces.len(), 8);
    assert_eq!(mesh.half_edges.len(), 24);
}

#[test]
fn next_forms_three_cycles_and_prev_inverts_it() {
    let mesh = grid();
    for he in 0..mesh.half_edges.len() {
        let n1 = mesh.half_edges[he].next;
        let n2 = mesh.half_edges[n1].next;
        let n3 = mesh.half_edges[n2].next;
        assert_eq!(n3, he);
        assert_eq!(mesh.half_edges[he].prev, n2);
        assert_eq!(mesh.half_edges[n1].prev, he);
    }
}

#[test]
fn face_half_edges_all_reference_their_face() {
    let mesh = grid();
    for f in 0..mesh.faces.len() {
        for &he in &mesh.face_half_edges(f) {
            assert_eq!(mesh.half_edges[he].face, f);
        }
        // the three origins are exactly the input triple, in input order
        let origins: Vec<usize> = mesh
            .face_half_edges(f)
            .iter()
            .map(|&he| mesh.half_edges[he].origin)
            .collect();
        assert_eq!(origins, mesh.face_vertices(f).to_vec());
    }
}

#[test]
fn twin_relation_is_symmetric() {
    let mesh = grid();
    for he in 0..mesh.half_edges.len() {
        if let Some(t) = mesh.half_edges[he].twin {
            assert_eq!(mesh.half_edges[t].twin, Some(he));
            assert_eq!(mesh.half_edges[t].origin, mesh.target(he));
            assert_eq!(mesh.target(t), mesh.half_edges[he].origin);
        }
    }
}

#[test]
fn grid_has_eight_boundary_half_edges_and_eight_twin_pairs() {
    let mesh = grid();
    assert_eq!(mesh.boundary_half_edges().len(), 8);

    let paired = (0..mesh.half_edges.len())
        .filter(|&he| mesh.half_edges[he].twin.is_some())
        .count();
    assert_eq!(paired, 16);
}

#[test]
fn hash_pairing_matches_exhaustive_pairwise_scan() {
    let mesh = grid();
    let m = mesh.half_edges.len();

    // reference pairing: every half-edge against every other
    let mut expected: Vec<Option<usize>> = vec![None; m];
    for i in 0..m {
        for j in (i + 1)..m {
            if mesh.target(i) == mesh.half_edges[j].origin
                && mesh.target(j) == mesh.half_edges[i].origin
            {
                expected[i] = Some(j);
                expected[j] = Some(i);
            }
        }
    }

    for he in 0..m {
        assert_eq!(mesh.half_edges[he].twin, expected[he]);
    }
}

#[test]
fn vertex_anchors_point_back_at_their_vertex() {
    let mesh = grid();
    for (v, vertex) in mesh.vertices.iter().enumerate() {
        let he = vertex.half_edge.unwrap();
        assert_eq!(mesh.half_edges[he].origin, v);
    }
}

#[test]
fn edge_map_resolves_every_directed_edge() {
    let mesh = grid();
    for he in 0..mesh.half_edges.len() {
        let key = (mesh.half_edges[he].origin, mesh.target(he));
        assert_eq!(mesh.edge_map.get(&key), Some(&he));
    }
}

#[test]
fn rebuilding_yields_identical_topology() {
    let points = grid_points();
    let triangles = grid_triangles();
    let a = Mesh::from_arrays(&points, &triangles).unwrap();
    let b = Mesh::from_arrays(&points, &triangles).unwrap();

    assert_eq!(a.half_edges.len(), b.half_edges.len());
    for he in 0..a.half_edges.len() {
        assert_eq!(a.half_edges[he], b.half_edges[he]);
    }
}

#[test]
fn out_of_range_index_is_rejected() {
    let points = grid_points();
    let mut triangles = grid_triangles();
    triangles[5] = [4, 9, 6];

    assert_eq!(
        Mesh::from_arrays(&points, &triangles).unwrap_err(),
        MeshError::InvalidTriangle { face: 5, vertex: 9 }
    );
}

#[test]
fn single_triangle_is_all_boundary() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ];
    let mesh = Mesh::from_arrays(&points, &[[0, 1, 2]]).unwrap();
    assert_eq!(mesh.boundary_half_edges().len(), 3);
    for he in 0..3 {
        assert!(mesh.is_boundary(he));
    }
}
