use std::cell::Cell;
use std::fmt::Display;
use std::rc::Rc;

/// Whether an effect follows the host's reduced-motion preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPolicy {
    Ignore,
    RespectReducedMotion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Inactive,
    Active,
}

/// Active/Inactive state machine around a session of type `R`.
///
/// The session owns every attached resource (surface, listeners, ticker) as
/// RAII handles, so leaving Active is just dropping it. Building a session may
/// fail; the effect then stays Inactive and renders nothing.
pub struct Lifecycle<R> {
    label: &'static str,
    policy: MotionPolicy,
    mounted: bool,
    reduced_motion: bool,
    session: Option<R>,
}

impl<R> Lifecycle<R> {
    pub fn new(label: &'static str, policy: MotionPolicy) -> Self {
        Self {
            label,
            policy,
            mounted: false,
            reduced_motion: false,
            session: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.session.is_some() {
            Phase::Active
        } else {
            Phase::Inactive
        }
    }

    pub fn policy(&self) -> MotionPolicy {
        self.policy
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn session(&self) -> Option<&R> {
        self.session.as_ref()
    }

    fn suppressed(&self) -> bool {
        self.policy == MotionPolicy::RespectReducedMotion && self.reduced_motion
    }

    pub fn mount<E: Display>(
        &mut self,
        reduced_motion: bool,
        build: impl FnOnce() -> Result<R, E>,
    ) -> Phase {
        self.mounted = true;
        self.reduced_motion = reduced_motion;
        if self.suppressed() {
            self.deactivate();
        } else {
            self.activate(build);
        }
        self.phase()
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.deactivate();
    }

    pub fn set_reduced_motion<E: Display>(
        &mut self,
        reduced_motion: bool,
        build: impl FnOnce() -> Result<R, E>,
    ) -> Phase {
        self.reduced_motion = reduced_motion;
        if !self.mounted || self.policy == MotionPolicy::Ignore {
            return self.phase();
        }
        if reduced_motion {
            self.deactivate();
        } else {
            self.activate(build);
        }
        self.phase()
    }

    fn activate<E: Display>(&mut self, build: impl FnOnce() -> Result<R, E>) {
        if self.session.is_some() {
            return;
        }
        if self.suppressed() {
            log::info!("[{}] reduced motion preferred; staying idle", self.label);
            return;
        }
        match build() {
            Ok(session) => {
                self.session = Some(session);
                log::info!("[{}] active", self.label);
            }
            Err(e) => log::warn!("[{}] effect disabled: {}", self.label, e),
        }
    }

    fn deactivate(&mut self) {
        if let Some(session) = self.session.take() {
            drop(session);
            log::info!("[{}] inactive", self.label);
        }
    }
}

/// Shared open/closed flag checked by tick callbacks before touching a scene.
#[derive(Clone, Debug)]
pub struct TickGate(Rc<Cell<bool>>);

impl TickGate {
    pub fn open() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn close(&self) {
        self.0.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }
}
