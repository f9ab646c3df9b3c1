use crate::trail::model::TrailModel;
use crate::trail::particle::Particle;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The live particle set of one effect session.
///
/// Only `emit` appends and only `tick` updates or removes, so a spawn can
/// never observe a half-finished simulation pass.
pub struct ParticleField<M: TrailModel> {
    model: M,
    particles: Vec<Particle<M::Token>>,
    rng: StdRng,
}

impl<M: TrailModel> ParticleField<M> {
    pub fn new(model: M) -> Self {
        Self::with_rng(model, StdRng::from_entropy())
    }

    pub fn seeded(model: M, seed: u64) -> Self {
        Self::with_rng(model, StdRng::seed_from_u64(seed))
    }

    fn with_rng(model: M, rng: StdRng) -> Self {
        Self {
            model,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Spawn one burst at `at`; returns the number of particles added.
    pub fn emit(&mut self, at: Vec2) -> usize {
        let count = self.model.burst();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.model.spawn(&mut self.rng, at);
            self.particles.push(particle);
        }
        count
    }

    /// Advance every particle one tick and drop the expired ones; returns how many were dropped.
    pub fn tick(&mut self) -> usize {
        let Self {
            model,
            particles,
            rng,
        } = self;
        let before = particles.len();
        particles.retain_mut(|p| model.step(&mut *rng, p));
        before - particles.len()
    }

    pub fn particles(&self) -> &[Particle<M::Token>] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
