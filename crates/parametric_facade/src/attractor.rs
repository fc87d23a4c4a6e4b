//! Point attractors and the cumulative influence field they generate.
//!
//! This module defines how facade panels are driven by scalar influence:
//! - Describe a single influencer with [`Attractor`].
//! - Collect influencers in insertion order with [`AttractorSet`].
//! - Query any scalar field through the [`InfluenceField`] trait.
use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Strength used when an attractor is added without an explicit strength.
pub const DEFAULT_STRENGTH: f64 = 1.0;
/// Radius used when an attractor is added without an explicit radius.
pub const DEFAULT_RADIUS: f64 = 10.0;
/// Upper bound of the cumulative influence.
pub const MAX_INFLUENCE: f64 = 1.0;

/// Trait for scalar fields sampled at a position in facade coordinates.
pub trait InfluenceField: Send + Sync {
    fn sample(&self, position: Vector2<f64>) -> f64;
}

/// A point influencer with linear distance falloff.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attractor {
    /// Position in facade coordinates.
    pub position: DVec2,
    /// Influence at the attractor's own position. Expected in [0, 1], not enforced.
    pub strength: f64,
    /// Distance at which the influence reaches zero.
    pub radius: f64,
}

impl Attractor {
    /// Create an attractor at `position` with the default strength and radius.
    pub fn new(position: impl Into<DVec2>) -> Self {
        Self {
            position: position.into(),
            strength: DEFAULT_STRENGTH,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Sets the strength.
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Returns `true` if this attractor can never influence any point.
    pub fn is_degenerate(&self) -> bool {
        self.radius.is_nan() || self.radius <= 0.0
    }

    /// Contribution of this attractor at `p`, or `0.0` when `p` lies at or beyond the radius.
    #[inline]
    pub fn contribution_at(&self, p: DVec2) -> f64 {
        let distance = self.position.distance(p);
        if distance < self.radius {
            self.strength * (1.0 - distance / self.radius)
        } else {
            0.0
        }
    }
}

/// Ordered collection of [`Attractor`]s. Insertion order is preserved.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttractorSet {
    attractors: Vec<Attractor>,
}

impl AttractorSet {
    /// Creates a new, empty [`AttractorSet`].
    pub fn new() -> Self {
        Self {
            attractors: Vec::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            attractors: Vec::with_capacity(n),
        }
    }

    /// Appends an attractor at `(x, y)`. Strength and radius are not range checked.
    pub fn add(&mut self, x: f64, y: f64, strength: f64, radius: f64) -> &mut Self {
        self.push(Attractor {
            position: DVec2::new(x, y),
            strength,
            radius,
        })
    }

    /// Appends an attractor at `(x, y)` with the default strength and radius.
    pub fn add_default(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Attractor::new(DVec2::new(x, y)))
    }

    /// Appends a prebuilt attractor.
    pub fn push(&mut self, attractor: Attractor) -> &mut Self {
        if attractor.is_degenerate() {
            warn!(
                "Attractor at ({}, {}) has radius {}; it will not influence any point.",
                attractor.position.x, attractor.position.y, attractor.radius
            );
        }
        self.attractors.push(attractor);
        self
    }

    /// Returns the number of attractors.
    pub fn len(&self) -> usize {
        self.attractors.len()
    }

    /// Returns `true` if the set holds no attractors.
    pub fn is_empty(&self) -> bool {
        self.attractors.is_empty()
    }

    /// Read-only view of the attractors in insertion order.
    pub fn as_slice(&self) -> &[Attractor] {
        &self.attractors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attractor> {
        self.attractors.iter()
    }

    /// Cumulative influence at `(x, y)`.
    ///
    /// Sums the linear falloff of every attractor whose radius strictly contains the point
    /// and caps the sum at [`MAX_INFLUENCE`]. There is no lower bound: negative strengths
    /// yield negative influence.
    pub fn influence_at(&self, x: f64, y: f64) -> f64 {
        self.influence_at_point(DVec2::new(x, y))
    }

    /// Same as [`AttractorSet::influence_at`] for a point value.
    #[inline]
    pub fn influence_at_point(&self, p: DVec2) -> f64 {
        let total = self
            .attractors
            .iter()
            .fold(0.0, |acc, a| acc + a.contribution_at(p));
        // NaN sums pass through unclamped.
        if total > MAX_INFLUENCE {
            MAX_INFLUENCE
        } else {
            total
        }
    }
}

impl InfluenceField for AttractorSet {
    fn sample(&self, position: Vector2<f64>) -> f64 {
        self.influence_at_point(DVec2::from(position))
    }
}

impl<'a> IntoIterator for &'a AttractorSet {
    type Item = &'a Attractor;
    type IntoIter = std::slice::Iter<'a, Attractor>;

    fn into_iter(self) -> Self::IntoIter {
        self.attractors.iter()
    }
}

impl FromIterator<Attractor> for AttractorSet {
    fn from_iter<I: IntoIterator<Item = Attractor>>(iter: I) -> Self {
        let mut set = AttractorSet::new();
        for attractor in iter {
            set.push(attractor);
        }
        set
    }
}

/// An influence field backed by a user-provided closure.
pub struct FnField<F>
where
    F: Fn(DVec2) -> f64 + Send + Sync,
{
    f: F,
}

impl<F> FnField<F>
where
    F: Fn(DVec2) -> f64 + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> InfluenceField for FnField<F>
where
    F: Fn(DVec2) -> f64 + Send + Sync,
{
    #[inline]
    fn sample(&self, position: Vector2<f64>) -> f64 {
        (self.f)(DVec2::from(position))
    }
}
