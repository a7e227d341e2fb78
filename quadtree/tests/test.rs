use quadtree::quadtree::{Config, QuadTree, QueryStats};
use quadtree::shapes::{Point, Rectangle};
use quadtree::{Particle, ParticleId, ParticleKind, QuadtreeError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn root_boundary() -> Rectangle {
    Rectangle::new(0.0, 0.0, 100.0, 100.0)
}

fn ids(particles: &[Particle]) -> Vec<ParticleId> {
    particles.iter().map(|particle| particle.id).collect()
}

fn random_particles(rng: &mut StdRng, count: u32, bounds: &Rectangle) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let position = bounds.get_random_point_inside(rng);
            if i % 3 == 0 {
                Particle::player(i, position, 5.0)
            } else {
                Particle::food(i, position, 2.0)
            }
        })
        .collect()
}

#[test]
fn test_insert_into_empty_tree() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    let particle = Particle::player(0, Point::new(25.0, 50.0), 2.0);
    assert!(qt.insert(particle));
    assert_eq!(qt.particles(), &[particle]);
    assert!(!qt.is_divided());
    assert_eq!(qt.len(), 1);
}

#[test]
fn test_new_rejects_invalid_arguments() {
    assert_eq!(
        QuadTree::new(root_boundary(), 0).unwrap_err(),
        QuadtreeError::InvalidNodeCapacity { capacity: 0 }
    );
    let err = QuadTree::new(Rectangle::new(0.0, 0.0, -1.0, 10.0), 4).unwrap_err();
    assert!(matches!(
        err,
        QuadtreeError::InvalidRectangleDims { width, .. } if width == -1.0
    ));
    assert!(QuadTree::new(Rectangle::new(0.0, 0.0, f64::NAN, 10.0), 4).is_err());
    assert!(err.to_string().contains("non-negative"));
}

#[test]
fn test_default_config() {
    let qt = QuadTree::new_with_config(root_boundary(), Config::default()).unwrap();
    assert_eq!(qt.node_capacity(), 4);
    assert_eq!(qt.depth(), 0);
    assert!(qt.is_empty());
}

#[test]
fn test_out_of_bounds_insert_is_rejected() {
    let mut qt = QuadTree::new(root_boundary(), 4).unwrap();
    assert!(qt.insert(Particle::food(0, Point::new(10.0, 10.0), 2.0)));
    assert!(!qt.insert(Particle::food(1, Point::new(100.5, 10.0), 2.0)));
    assert!(!qt.insert(Particle::food(2, Point::new(-1.0, 50.0), 2.0)));
    assert!(!qt.insert(Particle::player(3, Point::new(50.0, 200.0), 2.0)));
    assert_eq!(qt.len(), 1);
}

#[test]
fn test_edge_positions_are_inserted_once() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(0.0, 100.0),
        Point::new(100.0, 100.0),
        Point::new(50.0, 50.0),
        Point::new(50.0, 0.0),
        Point::new(0.0, 50.0),
    ];
    for (i, position) in corners.iter().enumerate() {
        assert!(qt.insert(Particle::food(i as u32, *position, 1.0)));
    }
    assert_eq!(qt.len(), corners.len());

    let found = qt.query(&root_boundary(), None);
    let unique: HashSet<_> = ids(&found).into_iter().collect();
    assert_eq!(found.len(), corners.len());
    assert_eq!(unique.len(), corners.len());
}

#[test]
fn test_subdivision_keeps_existing_particles_at_node() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    let a = Particle::player(1, Point::new(25.0, 50.0), 2.0);
    let b = Particle::player(2, Point::new(75.0, 50.0), 2.0);
    assert!(qt.insert(a));
    assert!(qt.insert(b));

    assert!(qt.is_divided());
    assert_eq!(ids(qt.particles()), vec![a.id]);

    let [nw, ne, sw, se] = qt.children().unwrap();
    assert_eq!(*nw.boundary(), Rectangle::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(*ne.boundary(), Rectangle::new(50.0, 0.0, 50.0, 50.0));
    assert_eq!(*sw.boundary(), Rectangle::new(0.0, 50.0, 50.0, 50.0));
    assert_eq!(*se.boundary(), Rectangle::new(50.0, 50.0, 50.0, 50.0));
    assert!(nw.particles().is_empty());
    assert_eq!(ids(ne.particles()), vec![b.id]);
    assert!(sw.particles().is_empty());
    assert!(se.particles().is_empty());
    assert_eq!(ne.depth(), 1);
}

#[test]
fn test_dump_empty_tree() {
    let qt = QuadTree::new(root_boundary(), 1).unwrap();
    assert_eq!(qt.to_string(), "Rectangle: [0, 0], [100, 100]");
}

#[test]
fn test_dump_with_particles() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    qt.insert(Particle::player(1, Point::new(25.0, 50.0), 2.0));
    qt.insert(Particle::player(2, Point::new(75.0, 50.0), 2.0));

    // Children are listed nw, ne, se, sw and only ne holds the second particle.
    let expected = "Rectangle: [0, 0], [100, 100], Player_1\n\
                    nw: Rectangle: [0, 0], [50, 50], \n\
                    ne: Rectangle: [50, 0], [50, 50], Player_2, \n\
                    se: Rectangle: [50, 50], [50, 50], \n\
                    sw: Rectangle: [0, 50], [50, 50]";
    assert_eq!(qt.to_string(), expected);
}

#[test]
fn test_remove() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    let particle = Particle::player(0, Point::new(25.0, 50.0), 2.0);
    qt.insert(particle);
    assert!(qt.remove(&particle));
    assert!(qt.particles().is_empty());
    assert!(!qt.remove(&particle));
    assert!(qt.is_empty());
}

#[test]
fn test_remove_matches_identity_not_position() {
    let mut qt = QuadTree::new(root_boundary(), 4).unwrap();
    let particle = Particle::food(7, Point::new(10.0, 10.0), 2.0);
    qt.insert(particle);

    // Same id, different snapshot: still the same entity.
    let mut moved = particle;
    moved.set_position(Point::new(90.0, 90.0));
    assert!(qt.remove(&moved));

    // Different id at the same position: not present.
    qt.insert(particle);
    let twin = Particle::food(8, particle.position, particle.radius);
    assert!(!qt.remove(&twin));
    assert_eq!(qt.len(), 1);
}

#[test]
fn test_remove_from_child_and_requery() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    let a = Particle::player(1, Point::new(25.0, 50.0), 2.0);
    let b = Particle::player(2, Point::new(75.0, 50.0), 2.0);
    let c = Particle::food(3, Point::new(80.0, 80.0), 2.0);
    for particle in [a, b, c] {
        qt.insert(particle);
    }

    assert!(qt.remove(&b));
    assert_eq!(qt.len(), 2);
    let found = qt.query(&Rectangle::new(60.0, 30.0, 30.0, 30.0), None);
    assert!(!ids(&found).contains(&b.id));
    let everything = qt.query(&root_boundary(), None);
    assert_eq!(ids(&everything).len(), 2);
    assert!(!ids(&everything).contains(&b.id));

    // The node stays divided after it was emptied.
    assert!(qt.is_divided());
    assert!(!qt.remove(&b));
    assert_eq!(qt.len(), 2);
}

#[test]
fn test_remove_missing_leaves_tree_unchanged() {
    let mut qt = QuadTree::new(root_boundary(), 2).unwrap();
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);
    for particle in random_particles(&mut rng, 20, &root_boundary()) {
        qt.insert(particle);
    }
    let before = qt.to_string();
    assert!(!qt.remove(&Particle::food(999, Point::new(50.0, 50.0), 2.0)));
    assert_eq!(qt.to_string(), before);
    assert_eq!(qt.len(), 20);
}

#[test]
fn test_query_completeness() {
    let bounds = Rectangle::new(0.0, 0.0, 800.0, 600.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(42);
    let particles = random_particles(&mut rng, 500, &bounds);

    let mut qt = QuadTree::new(bounds, 4).unwrap();
    for particle in particles.iter() {
        assert!(qt.insert(*particle));
    }
    assert_eq!(qt.len(), particles.len());

    let found = qt.query(&bounds, None);
    assert_eq!(found.len(), particles.len());
    let found_ids: HashSet<_> = ids(&found).into_iter().collect();
    let expected_ids: HashSet<_> = ids(&particles).into_iter().collect();
    assert_eq!(found_ids, expected_ids);

    let mut all = Vec::new();
    qt.all_particles(&mut all);
    assert_eq!(all.len(), particles.len());
}

#[test]
fn test_query_matches_brute_force() {
    let bounds = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(3);
    let particles = random_particles(&mut rng, 300, &bounds);
    let mut qt = QuadTree::new(bounds, 4).unwrap();
    for particle in particles.iter() {
        qt.insert(*particle);
    }

    for _ in 0..50 {
        let region = Rectangle::new(
            rng.gen_range(-100.0..900.0),
            rng.gen_range(-100.0..900.0),
            rng.gen_range(0.0..300.0),
            rng.gen_range(0.0..300.0),
        );
        for kind_filter in [None, Some(ParticleKind::Player), Some(ParticleKind::Food)] {
            let found: HashSet<_> = ids(&qt.query(&region, kind_filter)).into_iter().collect();
            let expected: HashSet<_> = particles
                .iter()
                .filter(|p| region.contains_point(&p.position) && p.matches(kind_filter))
                .map(|p| p.id)
                .collect();
            assert_eq!(found, expected);
        }
    }
}

#[test]
fn test_query_kind_filter() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    let position = Point::new(25.0, 50.0);
    let players: Vec<_> = (0..5).map(|i| Particle::player(i, position, 5.0)).collect();
    let food: Vec<_> = (5..10).map(|i| Particle::food(i, position, 2.0)).collect();
    for particle in players.iter().chain(food.iter()) {
        assert!(qt.insert(*particle));
    }

    let found_food: HashSet<_> = ids(&qt.query(&root_boundary(), Some(ParticleKind::Food)))
        .into_iter()
        .collect();
    let expected_food: HashSet<_> = ids(&food).into_iter().collect();
    assert_eq!(found_food, expected_food);

    let found_players: HashSet<_> = ids(&qt.query(&root_boundary(), Some(ParticleKind::Player)))
        .into_iter()
        .collect();
    let expected_players: HashSet<_> = ids(&players).into_iter().collect();
    assert_eq!(found_players, expected_players);
}

#[test]
fn test_query_without_filter_differs_from_player_filter() {
    let mut qt = QuadTree::new(root_boundary(), 4).unwrap();
    qt.insert(Particle::player(0, Point::new(10.0, 10.0), 5.0));
    qt.insert(Particle::food(1, Point::new(12.0, 10.0), 2.0));
    qt.insert(Particle::food(2, Point::new(14.0, 10.0), 2.0));

    assert_eq!(qt.query(&root_boundary(), None).len(), 3);
    let players = qt.query(&root_boundary(), Some(ParticleKind::Player));
    assert_eq!(ids(&players), vec![ParticleId(0)]);
}

#[test]
fn test_query_orders_by_distance_to_region_center() {
    let bounds = Rectangle::new(0.0, 0.0, 500.0, 500.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(11);
    let mut qt = QuadTree::new(bounds, 3).unwrap();
    for particle in random_particles(&mut rng, 200, &bounds) {
        qt.insert(particle);
    }

    let region = Rectangle::new(100.0, 150.0, 220.0, 120.0);
    let center = region.center();
    let found = qt.query(&region, None);
    assert!(!found.is_empty());
    for pair in found.windows(2) {
        assert!(
            pair[0].position.distance_to(&center) <= pair[1].position.distance_to(&center)
        );
    }
}

#[test]
fn test_query_orders_by_region_center_not_node_center() {
    let mut qt = QuadTree::new(root_boundary(), 4).unwrap();
    qt.insert(Particle::food(0, Point::new(50.0, 50.0), 1.0));
    qt.insert(Particle::food(1, Point::new(5.0, 5.0), 1.0));
    qt.insert(Particle::food(2, Point::new(20.0, 20.0), 1.0));

    let found = qt.query(&Rectangle::new(0.0, 0.0, 10.0, 10.0).inset(-60.0), None);
    assert_eq!(
        ids(&found),
        vec![ParticleId(1), ParticleId(2), ParticleId(0)]
    );
}

#[test]
fn test_disjoint_query_is_empty() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    qt.insert(Particle::player(1, Point::new(25.0, 50.0), 2.0));
    qt.insert(Particle::player(2, Point::new(75.0, 50.0), 2.0));
    assert!(qt.is_divided());

    let (found, stats) = qt.query_with_stats(&Rectangle::new(200.0, 200.0, 10.0, 10.0), None);
    assert!(found.is_empty());
    // Only the root's overlap check runs; no child or particle is looked at.
    assert_eq!(
        stats,
        QueryStats {
            node_checks: 1,
            node_visits: 0,
            particle_visits: 0,
        }
    );
}

#[test]
fn test_query_skips_children_outside_region() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    qt.insert(Particle::player(1, Point::new(25.0, 50.0), 2.0));
    qt.insert(Particle::player(2, Point::new(75.0, 50.0), 2.0));

    // Inside the ne quadrant only.
    let (found, stats) = qt.query_with_stats(&Rectangle::new(60.0, 10.0, 10.0, 10.0), None);
    assert!(found.is_empty());
    assert_eq!(stats.node_checks, 5);
    assert_eq!(stats.node_visits, 2);
    assert_eq!(stats.particle_visits, 2);

    let (found, stats) = qt.query_with_stats(&root_boundary(), None);
    assert_eq!(found.len(), 2);
    assert_eq!(stats.node_visits, 5);
}

#[test]
fn test_particle_is_inside() {
    let region = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(Particle::food(0, Point::new(10.0, 10.0), 2.0).is_inside(&region));
    // The body may overhang; only the centre counts.
    assert!(Particle::player(1, Point::new(9.0, 5.0), 5.0).is_inside(&region));
    assert!(!Particle::food(2, Point::new(10.5, 5.0), 0.0).is_inside(&region));
}

#[test]
fn test_query_touching_region_finds_edge_particle() {
    let mut qt = QuadTree::new(root_boundary(), 4).unwrap();
    qt.insert(Particle::food(0, Point::new(100.0, 40.0), 1.0));
    let found = qt.query(&Rectangle::new(100.0, 30.0, 20.0, 20.0), None);
    assert_eq!(ids(&found), vec![ParticleId(0)]);
}

#[test]
fn test_coincident_particles_stop_at_max_depth() {
    let config = Config {
        node_capacity: 1,
        max_depth: 3,
    };
    let mut qt = QuadTree::new_with_config(root_boundary(), config).unwrap();
    for i in 0..50 {
        assert!(qt.insert(Particle::food(i, Point::new(30.0, 30.0), 1.0)));
    }
    assert_eq!(qt.len(), 50);

    let mut boxes = Vec::new();
    qt.all_node_bounding_boxes(&mut boxes);
    // Root plus three levels of four children along one path.
    assert_eq!(boxes.len(), 1 + 4 * 3);
    assert_eq!(qt.query(&root_boundary(), Some(ParticleKind::Food)).len(), 50);
}

#[test]
fn test_all_node_bounding_boxes() {
    let mut qt = QuadTree::new(root_boundary(), 1).unwrap();
    let mut boxes = Vec::new();
    qt.all_node_bounding_boxes(&mut boxes);
    assert_eq!(boxes, vec![root_boundary()]);

    qt.insert(Particle::player(1, Point::new(25.0, 50.0), 2.0));
    qt.insert(Particle::player(2, Point::new(75.0, 50.0), 2.0));
    boxes.clear();
    qt.all_node_bounding_boxes(&mut boxes);
    assert_eq!(boxes.len(), 5);
    assert_eq!(boxes[0], root_boundary());
    assert_eq!(boxes[2], Rectangle::new(50.0, 0.0, 50.0, 50.0));
}
