//! The two ephemeral-particle generators behind the site's ambient effects.
//!
//! Each generator owns its id sequence and random source and turns spawn
//! triggers (pointer events, interval ticks) into immutable particle
//! descriptors. Placement and removal go through the [`Surface`] trait, so
//! the full lifecycle runs against a plain map in tests and against the
//! document in the app. All motion is declarative CSS keyed off the
//! generator's tag class; once placed, a particle is never mutated.

use rand::Rng;

/// Class carried by cursor-trail particles.
pub const SPARKLE_TAG: &str = "magic-sparkle";
/// Class carried by ambient dust particles.
pub const DUST_TAG: &str = "magic-dust";

/// Tuning for the cursor sparkle trail.
pub struct TrailTuning {
    /// Chance that a pointer event spawns a burst at all.
    pub spawn_chance: f64,
    /// Burst size is uniform in `1..=max_burst`.
    pub max_burst: u32,
    /// Per-axis scatter around the pointer, uniform in `[-scatter, scatter)` px.
    pub scatter: f64,
    /// Fixed time from placement to removal.
    pub lifetime_ms: u32,
}

pub const TRAIL: TrailTuning = TrailTuning {
    spawn_chance: 0.8,
    max_burst: 3,
    scatter: 7.5,
    lifetime_ms: 2_000,
};

/// Tuning for the ambient dust field.
pub struct DustTuning {
    /// Spawn cadence.
    pub tick_ms: u32,
    /// Batch size per tick is uniform in `1..=max_batch`.
    pub max_batch: u32,
    /// Spawns within one tick are deferred by `index * stagger_ms`.
    pub stagger_ms: u32,
    /// Fall duration, uniform in `[min_fall_secs, max_fall_secs)`.
    pub min_fall_secs: f64,
    pub max_fall_secs: f64,
    /// Entry delay, uniform in `[0, max_delay_secs)`.
    pub max_delay_secs: f64,
    /// Square side, uniform in `[min_size_px, max_size_px)`.
    pub min_size_px: f64,
    pub max_size_px: f64,
}

pub const DUST: DustTuning = DustTuning {
    tick_ms: 800,
    max_batch: 3,
    stagger_ms: 200,
    min_fall_secs: 3.0,
    max_fall_secs: 8.0,
    max_delay_secs: 2.0,
    min_size_px: 2.0,
    max_size_px: 4.0,
};

/// Monotonic per-generator particle ids. Never reused within an instance;
/// a remount builds a fresh generator and starts over from zero.
#[derive(Default)]
struct IdSequence(u64);

impl IdSequence {
    fn next(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// One cursor-trail particle. Coordinates are absolute viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub lifetime_ms: u32,
}

impl Sparkle {
    /// Inline style placing the node; the rest comes from the tag class.
    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

/// One ambient dust particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Mote {
    pub id: u64,
    /// Horizontal position as a percentage of the viewport width.
    pub left_pct: f64,
    pub fall_secs: f64,
    pub delay_secs: f64,
    pub size_px: f64,
    /// Deferral from its tick before the node is placed.
    pub stagger_ms: u32,
}

impl Mote {
    /// Total time from placement to removal: the fall plus the entry delay.
    pub fn lifetime_ms(&self) -> u32 {
        ((self.fall_secs + self.delay_secs) * 1_000.0) as u32
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}%; width: {}px; height: {}px; animation-duration: {}s; animation-delay: {}s;",
            self.left_pct, self.size_px, self.size_px, self.fall_secs, self.delay_secs
        )
    }
}

/// The shared visual root particles are placed on.
///
/// `clear` is the single removal path. Expiry timers and teardown sweeps
/// both go through it, so whichever runs first wins and the loser is a
/// silent no-op. The two generators use distinct tags and never touch each
/// other's nodes.
pub trait Surface {
    /// Insert a node for `id` carrying the tag class and the given style.
    fn place(&self, id: u64, tag: &str, style: &str);
    /// Remove the node for `id` if it is still present.
    fn clear(&self, id: u64, tag: &str) -> bool;
    /// Remove every node carrying `tag`.
    fn sweep(&self, tag: &str);
    /// Number of nodes currently carrying `tag`.
    fn count(&self, tag: &str) -> usize;
}

/// Spawns short-lived sparkles scattered around the pointer.
pub struct SparkleTrail<R: Rng> {
    rng: R,
    ids: IdSequence,
}

impl<R: Rng> SparkleTrail<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            ids: IdSequence::default(),
        }
    }

    /// Spawn policy for one pointer event: most events produce a burst of
    /// 1-3 sparkles near the pointer, the rest produce none. Particles are
    /// created in loop order even though they expire in random order.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Vec<Sparkle> {
        if !self.rng.gen_bool(TRAIL.spawn_chance) {
            return Vec::new();
        }
        let burst = self.rng.gen_range(1..=TRAIL.max_burst);
        (0..burst)
            .map(|_| Sparkle {
                id: self.ids.next(),
                x: x + self.rng.gen_range(-TRAIL.scatter..TRAIL.scatter),
                y: y + self.rng.gen_range(-TRAIL.scatter..TRAIL.scatter),
                lifetime_ms: TRAIL.lifetime_ms,
            })
            .collect()
    }
}

/// Spawns slow-falling dust across the viewport on a fixed cadence,
/// independent of user input.
pub struct DustField<R: Rng> {
    rng: R,
    ids: IdSequence,
}

impl<R: Rng> DustField<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            ids: IdSequence::default(),
        }
    }

    /// One interval tick: 1-3 motes, creation staggered by loop index so a
    /// batch never lands as one synchronized burst.
    pub fn tick(&mut self) -> Vec<Mote> {
        let batch = self.rng.gen_range(1..=DUST.max_batch);
        (0..batch)
            .map(|i| Mote {
                id: self.ids.next(),
                left_pct: self.rng.gen_range(0.0..100.0),
                fall_secs: self.rng.gen_range(DUST.min_fall_secs..DUST.max_fall_secs),
                delay_secs: self.rng.gen_range(0.0..DUST.max_delay_secs),
                size_px: self.rng.gen_range(DUST.min_size_px..DUST.max_size_px),
                stagger_ms: i * DUST.stagger_ms,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// Map-backed stand-in for the document.
    #[derive(Default)]
    struct MapSurface {
        nodes: RefCell<HashMap<(String, u64), String>>,
    }

    impl Surface for MapSurface {
        fn place(&self, id: u64, tag: &str, style: &str) {
            self.nodes
                .borrow_mut()
                .insert((tag.to_string(), id), style.to_string());
        }

        fn clear(&self, id: u64, tag: &str) -> bool {
            self.nodes
                .borrow_mut()
                .remove(&(tag.to_string(), id))
                .is_some()
        }

        fn sweep(&self, tag: &str) {
            self.nodes.borrow_mut().retain(|(t, _), _| t != tag);
        }

        fn count(&self, tag: &str) -> usize {
            self.nodes.borrow().keys().filter(|(t, _)| t == tag).count()
        }
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn sparkles_scatter_around_the_pointer() {
        let mut trail = SparkleTrail::new(rng(7));
        for _ in 0..200 {
            for sparkle in trail.pointer_moved(100.0, 100.0) {
                assert!((sparkle.x - 100.0).abs() <= TRAIL.scatter);
                assert!((sparkle.y - 100.0).abs() <= TRAIL.scatter);
                assert_eq!(sparkle.lifetime_ms, 2_000);
            }
        }
    }

    #[test]
    fn burst_size_stays_within_bounds() {
        let mut trail = SparkleTrail::new(rng(11));
        let mut spawned_any = false;
        for _ in 0..200 {
            let burst = trail.pointer_moved(0.0, 0.0);
            assert!(burst.len() <= TRAIL.max_burst as usize);
            spawned_any |= !burst.is_empty();
        }
        assert!(spawned_any);
    }

    #[test]
    fn sparkle_ids_are_unique_for_a_generator_lifetime() {
        let mut trail = SparkleTrail::new(rng(3));
        let mut seen = HashSet::new();
        for _ in 0..500 {
            for sparkle in trail.pointer_moved(50.0, 50.0) {
                assert!(seen.insert(sparkle.id));
            }
        }
    }

    #[test]
    fn dust_fields_stay_within_their_ranges() {
        let mut field = DustField::new(rng(23));
        for _ in 0..200 {
            let batch = field.tick();
            assert!((1..=DUST.max_batch as usize).contains(&batch.len()));
            for (i, mote) in batch.iter().enumerate() {
                assert!((0.0..100.0).contains(&mote.left_pct));
                assert!((DUST.min_fall_secs..DUST.max_fall_secs).contains(&mote.fall_secs));
                assert!((0.0..DUST.max_delay_secs).contains(&mote.delay_secs));
                assert!((DUST.min_size_px..DUST.max_size_px).contains(&mote.size_px));
                assert_eq!(mote.stagger_ms, i as u32 * DUST.stagger_ms);
            }
        }
    }

    #[test]
    fn mote_ids_are_unique_across_ticks() {
        let mut field = DustField::new(rng(29));
        let mut seen = HashSet::new();
        for _ in 0..500 {
            for mote in field.tick() {
                assert!(seen.insert(mote.id));
            }
        }
    }

    #[test]
    fn mote_lifetime_is_fall_plus_delay() {
        let mote = Mote {
            id: 0,
            left_pct: 10.0,
            fall_secs: 4.0,
            delay_secs: 1.5,
            size_px: 3.0,
            stagger_ms: 0,
        };
        assert_eq!(mote.lifetime_ms(), 5_500);
    }

    #[test]
    fn clear_is_idempotent() {
        let surface = MapSurface::default();
        surface.place(1, SPARKLE_TAG, "left: 0px; top: 0px;");
        assert!(surface.clear(1, SPARKLE_TAG));
        assert!(!surface.clear(1, SPARKLE_TAG));
        assert_eq!(surface.count(SPARKLE_TAG), 0);
    }

    #[test]
    fn sweep_removes_only_the_given_tag() {
        let surface = MapSurface::default();
        let mut trail = SparkleTrail::new(rng(5));
        let mut placed = Vec::new();
        while placed.is_empty() {
            for sparkle in trail.pointer_moved(10.0, 10.0) {
                surface.place(sparkle.id, SPARKLE_TAG, &sparkle.style());
                placed.push(sparkle.id);
            }
        }
        surface.place(900, DUST_TAG, "left: 50%;");
        surface.sweep(SPARKLE_TAG);
        assert_eq!(surface.count(SPARKLE_TAG), 0);
        assert_eq!(surface.count(DUST_TAG), 1);
        // An expiry timer firing after the sweep finds nothing to remove.
        assert!(!surface.clear(placed[0], SPARKLE_TAG));
    }

    #[test]
    fn unmounting_before_any_tick_leaves_nothing() {
        let surface = MapSurface::default();
        let _field = DustField::new(rng(13));
        // No tick ever fires; the teardown sweep still leaves a clean root.
        surface.sweep(DUST_TAG);
        assert_eq!(surface.count(DUST_TAG), 0);
    }

    #[test]
    fn teardown_sweep_clears_every_live_mote() {
        let surface = MapSurface::default();
        let mut field = DustField::new(rng(41));
        for _ in 0..10 {
            for mote in field.tick() {
                surface.place(mote.id, DUST_TAG, &mote.style());
            }
        }
        assert!(surface.count(DUST_TAG) >= 10);
        surface.sweep(DUST_TAG);
        assert_eq!(surface.count(DUST_TAG), 0);
    }
}
