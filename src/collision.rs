/// Collision detection for Alien Invasion
///
/// Everything in the game is an axis-aligned rectangle, so collision is plain
/// AABB overlap. Rectangles that only touch along an edge do not collide.
///
/// # Architecture
///
/// - `Collidable` trait: anything with a bounding rectangle
/// - `aabb_intersect`: the core overlap test
/// - Group queries: one entity against a group, and group against group
use sdl2::rect::Rect;

/// Trait for entities that participate in collision detection.
///
/// # Example
///
/// ```rust
/// impl Collidable for Bullet {
///     fn get_bounds(&self) -> Rect {
///         self.rect
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    ///
    /// The returned `Rect` should match the entity's actual position and size
    /// as rendered on screen.
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// For two rectangles to NOT intersect, one of these must be true:
/// - a is completely to the left of b
/// - a is completely to the right of b
/// - a is completely above b
/// - a is completely below b
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the index of the first entity in `entities` overlapping `entity`.
///
/// # Example
///
/// ```rust
/// if collide_any(&ship, fleet.aliens()).is_some() {
///     // ship hit
/// }
/// ```
pub fn collide_any<T: Collidable>(entity: &impl Collidable, entities: &[T]) -> Option<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .position(|other| aabb_intersect(&entity_bounds, &other.get_bounds()))
}

/// Pairs up overlapping entities from two groups.
///
/// Each entity of either group appears in at most one pair: a bullet stops at
/// the first alien it overlaps, and an alien already claimed by an earlier
/// bullet is skipped. Pairs are `(index_in_a, index_in_b)` in `a` order.
pub fn group_collide<A: Collidable, B: Collidable>(a: &[A], b: &[B]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut claimed = vec![false; b.len()];

    for (ai, first) in a.iter().enumerate() {
        let first_bounds = first.get_bounds();

        for (bi, second) in b.iter().enumerate() {
            if claimed[bi] {
                continue;
            }
            if aabb_intersect(&first_bounds, &second.get_bounds()) {
                claimed[bi] = true;
                pairs.push((ai, bi));
                break;
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Box2(Rect);

    impl Collidable for Box2 {
        fn get_bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 3, 15);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_collide_any_returns_first_match() {
        let ship = Box2(Rect::new(50, 50, 20, 20));
        let aliens = vec![
            Box2(Rect::new(0, 0, 10, 10)),
            Box2(Rect::new(60, 60, 10, 10)),
            Box2(Rect::new(55, 55, 10, 10)),
        ];

        assert_eq!(collide_any(&ship, &aliens), Some(1));
        assert_eq!(collide_any(&ship, &aliens[..1]), None);
    }

    #[test]
    fn test_group_collide_one_bullet_one_alien() {
        // One bullet overlapping two aliens only takes the first
        let bullets = vec![Box2(Rect::new(10, 0, 30, 10))];
        let aliens = vec![Box2(Rect::new(0, 0, 15, 10)), Box2(Rect::new(25, 0, 15, 10))];

        assert_eq!(group_collide(&bullets, &aliens), vec![(0, 0)]);
    }

    #[test]
    fn test_group_collide_alien_claimed_once() {
        // Two bullets inside the same alien: only the first is consumed
        let bullets = vec![Box2(Rect::new(5, 5, 2, 2)), Box2(Rect::new(6, 6, 2, 2))];
        let aliens = vec![Box2(Rect::new(0, 0, 20, 20))];

        assert_eq!(group_collide(&bullets, &aliens), vec![(0, 0)]);
    }

    #[test]
    fn test_group_collide_independent_pairs() {
        let bullets = vec![
            Box2(Rect::new(100, 0, 2, 2)),
            Box2(Rect::new(5, 5, 2, 2)),
            Box2(Rect::new(45, 5, 2, 2)),
        ];
        let aliens = vec![Box2(Rect::new(0, 0, 20, 20)), Box2(Rect::new(40, 0, 20, 20))];

        assert_eq!(group_collide(&bullets, &aliens), vec![(1, 0), (2, 1)]);
    }
}
