use pscan_core::{ClusterResult, Engine, EngineConfig};
use pscan_graph::CsrView;

fn single_threaded_config() -> EngineConfig {
    EngineConfig::new(8192, 32, 64, 64, 1)
}

fn run(offset: &[u32], adj: &[u32], degree: &[u32], eps_a: u32, eps_b: u32, mu: u32) -> ClusterResult {
    let graph = CsrView::<u32>::new(offset, adj, degree);
    let engine = Engine::new(graph, eps_a, eps_b, mu, single_threaded_config()).unwrap();
    engine.run()
}

#[test]
fn triangle_all_core_single_cluster() {
    // 0 - 1 - 2 - 0, eps = 0.5, mu = 2.
    let offset = vec![0u32, 2, 4, 6];
    let adj = vec![1u32, 2, 0, 2, 0, 1];
    let degree = vec![2u32, 2, 2];
    let result = run(&offset, &adj, &degree, 1, 2, 2);

    assert_eq!(result.is_core, vec![true, true, true]);
    assert_eq!(result.cluster_id, vec![Some(0), Some(0), Some(0)]);
    assert!(result.non_core_members.is_empty());
}

#[test]
fn path_splits_into_two_core_clusters() {
    // 0 - 1 - 2 - 3, eps = 0.7, mu = 2.
    //
    // By the path's own reflection symmetry (0<->3, 1<->2), sigma(0,1)
    // must equal sigma(2,3): both are 2/sqrt(2*3) ~= 0.816 >= 0.7
    // (DIRECT), while sigma(1,2) = 2/sqrt(3*3) ~= 0.667 < 0.7
    // (NOT_DIRECT). Every vertex reaches the mu-1=1 direct-edge
    // threshold on its own endpoint edge, so all four are core, split
    // into two clusters by the one non-direct edge in the middle.
    let offset = vec![0u32, 1, 3, 5, 6];
    let adj = vec![1u32, 0, 2, 1, 3, 2];
    let degree = vec![1u32, 2, 2, 1];
    let result = run(&offset, &adj, &degree, 7, 10, 2);

    assert_eq!(result.is_core, vec![true, true, true, true]);
    assert_eq!(result.cluster_id[0], result.cluster_id[1]);
    assert_eq!(result.cluster_id[2], result.cluster_id[3]);
    assert_ne!(result.cluster_id[0], result.cluster_id[2]);
    assert!(result.non_core_members.is_empty());
}

#[test]
fn star_centre_is_core_leaves_are_members() {
    // Centre 0 with leaves 1..=4, eps = 0.5, mu = 3. The centre reaches
    // mu-1=2 direct edges and becomes core; each leaf has only one
    // direct edge, can't reach the threshold, and attaches to the
    // centre's cluster as a non-core member instead of an outlier.
    let offset = vec![0u32, 4, 5, 6, 7, 8];
    let adj = vec![1u32, 2, 3, 4, 0, 0, 0, 0];
    let degree = vec![4u32, 1, 1, 1, 1];
    let result = run(&offset, &adj, &degree, 1, 2, 3);

    assert_eq!(result.is_core, vec![true, false, false, false, false]);
    let centre_cluster = result.cluster_id[0].unwrap();

    let mut members = result.non_core_members.clone();
    members.sort();
    assert_eq!(
        members,
        vec![
            (centre_cluster, 1),
            (centre_cluster, 2),
            (centre_cluster, 3),
            (centre_cluster, 4),
        ]
    );
}

#[test]
fn two_triangles_sharing_a_vertex_form_one_cluster() {
    // Triangles {0,1,2} and {2,3,4} sharing vertex 2, eps = 0.5, mu = 3.
    let offset = vec![0u32, 2, 4, 8, 10, 12];
    let adj = vec![1u32, 2, 0, 2, 0, 1, 3, 4, 2, 4, 2, 3];
    let degree = vec![2u32, 2, 4, 2, 2];
    let result = run(&offset, &adj, &degree, 1, 2, 3);

    assert_eq!(result.is_core, vec![true, true, true, true, true]);
    let cluster = result.cluster_id[2].unwrap();
    for id in &result.cluster_id {
        assert_eq!(*id, Some(cluster));
    }
    assert!(result.non_core_members.is_empty());
}

#[test]
fn two_disjoint_triangles_form_two_clusters() {
    // {0,1,2} and {3,4,5}, no edges between them, eps = 0.5, mu = 2.
    let offset = vec![0u32, 2, 4, 6, 8, 10, 12];
    let adj = vec![1u32, 2, 0, 2, 0, 1, 4, 5, 3, 5, 3, 4];
    let degree = vec![2u32; 6];
    let result = run(&offset, &adj, &degree, 1, 2, 2);

    assert_eq!(result.is_core, vec![true; 6]);
    assert_eq!(result.cluster_id[0], Some(0));
    assert_eq!(result.cluster_id[1], Some(0));
    assert_eq!(result.cluster_id[2], Some(0));
    assert_eq!(result.cluster_id[3], Some(3));
    assert_eq!(result.cluster_id[4], Some(3));
    assert_eq!(result.cluster_id[5], Some(3));
    assert!(result.non_core_members.is_empty());
}

#[test]
fn clique_five_all_core_single_cluster() {
    // K5, eps = 0.9, mu = 4.
    let n = 5usize;
    let mut offset = vec![0u32];
    let mut adj = vec![];
    for u in 0..n {
        for v in 0..n {
            if v != u {
                adj.push(v as u32);
            }
        }
        offset.push(adj.len() as u32);
    }
    let degree = vec![(n - 1) as u32; n];
    let result = run(&offset, &adj, &degree, 9, 10, 4);

    assert_eq!(result.is_core, vec![true; 5]);
    for id in &result.cluster_id {
        assert_eq!(*id, Some(0));
    }
    assert!(result.non_core_members.is_empty());
}
