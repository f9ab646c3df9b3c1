// Host-side tests for the effect lifecycle state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod trail {
    pub mod appearance {
        include!("../src/trail/appearance.rs");
    }
    pub mod characters {
        include!("../src/trail/characters.rs");
    }
    pub mod config {
        include!("../src/trail/config.rs");
    }
    pub mod fairy_dust {
        include!("../src/trail/fairy_dust.rs");
    }
    pub mod field {
        include!("../src/trail/field.rs");
    }
    pub mod lifecycle {
        include!("../src/trail/lifecycle.rs");
    }
    pub mod model {
        include!("../src/trail/model.rs");
    }
    pub mod pacing {
        include!("../src/trail/pacing.rs");
    }
    pub mod particle {
        include!("../src/trail/particle.rs");
    }
    pub mod snowfall {
        include!("../src/trail/snowfall.rs");
    }
}

use std::cell::Cell;
use std::rc::Rc;
use trail::lifecycle::*;

/// Live resource counts, standing in for attached listeners, timers and surfaces.
#[derive(Default)]
struct Host {
    listeners: Cell<i32>,
    timers: Cell<i32>,
    surfaces: Cell<i32>,
    builds: Cell<i32>,
}

impl Host {
    fn attached(&self) -> (i32, i32, i32) {
        (self.listeners.get(), self.timers.get(), self.surfaces.get())
    }
}

struct Session {
    host: Rc<Host>,
}

impl Session {
    fn build(host: &Rc<Host>) -> Result<Session, String> {
        host.builds.set(host.builds.get() + 1);
        host.listeners.set(host.listeners.get() + 1);
        host.timers.set(host.timers.get() + 1);
        host.surfaces.set(host.surfaces.get() + 1);
        Ok(Session { host: host.clone() })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let h = &self.host;
        h.listeners.set(h.listeners.get() - 1);
        h.timers.set(h.timers.get() - 1);
        h.surfaces.set(h.surfaces.get() - 1);
    }
}

fn fixture(policy: MotionPolicy) -> (Rc<Host>, Lifecycle<Session>) {
    (Rc::new(Host::default()), Lifecycle::new("test", policy))
}

#[test]
fn mount_activates_and_unmount_releases_everything() {
    let (host, mut lc) = fixture(MotionPolicy::Ignore);
    assert_eq!(lc.phase(), Phase::Inactive);
    assert_eq!(lc.mount(false, || Session::build(&host)), Phase::Active);
    assert_eq!(host.attached(), (1, 1, 1));
    lc.unmount();
    assert_eq!(lc.phase(), Phase::Inactive);
    assert_eq!(host.attached(), (0, 0, 0));
}

#[test]
fn remounting_while_reduced_motion_is_preferred_deactivates() {
    let (host, mut lc) = fixture(MotionPolicy::RespectReducedMotion);
    assert_eq!(lc.mount(false, || Session::build(&host)), Phase::Active);
    assert_eq!(lc.mount(true, || Session::build(&host)), Phase::Inactive);
    assert_eq!(host.attached(), (0, 0, 0));
    assert!(lc.is_mounted());
    assert_eq!(lc.mount(false, || Session::build(&host)), Phase::Active);
    assert_eq!(host.builds.get(), 2);
}

#[test]
fn remounting_with_motion_ignored_keeps_the_session() {
    let (host, mut lc) = fixture(MotionPolicy::Ignore);
    lc.mount(false, || Session::build(&host));
    assert_eq!(lc.mount(true, || Session::build(&host)), Phase::Active);
    assert_eq!(host.builds.get(), 1);
    assert_eq!(host.attached(), (1, 1, 1));
}

#[test]
fn teardown_twice_is_a_no_op() {
    let (host, mut lc) = fixture(MotionPolicy::RespectReducedMotion);
    lc.mount(false, || Session::build(&host));
    lc.unmount();
    lc.unmount();
    assert_eq!(lc.phase(), Phase::Inactive);
    assert_eq!(host.attached(), (0, 0, 0));
}

#[test]
fn teardown_before_mount_is_a_no_op() {
    let (host, mut lc) = fixture(MotionPolicy::Ignore);
    lc.unmount();
    assert_eq!(host.attached(), (0, 0, 0));
    assert!(!lc.is_mounted());
}

#[test]
fn mounting_an_active_effect_does_not_rebuild() {
    let (host, mut lc) = fixture(MotionPolicy::Ignore);
    lc.mount(false, || Session::build(&host));
    lc.mount(false, || Session::build(&host));
    assert_eq!(host.builds.get(), 1);
    assert_eq!(host.attached(), (1, 1, 1));
}

#[test]
fn reduced_motion_at_mount_keeps_the_effect_idle() {
    let (host, mut lc) = fixture(MotionPolicy::RespectReducedMotion);
    assert_eq!(lc.mount(true, || Session::build(&host)), Phase::Inactive);
    assert!(lc.is_mounted());
    assert_eq!(host.builds.get(), 0);
    assert_eq!(host.attached(), (0, 0, 0));
}

#[test]
fn preference_changes_start_and_stop_the_effect() {
    let (host, mut lc) = fixture(MotionPolicy::RespectReducedMotion);
    lc.mount(true, || Session::build(&host));

    assert_eq!(lc.set_reduced_motion(false, || Session::build(&host)), Phase::Active);
    assert_eq!(host.attached(), (1, 1, 1));

    assert_eq!(lc.set_reduced_motion(true, || Session::build(&host)), Phase::Inactive);
    assert_eq!(host.attached(), (0, 0, 0));

    assert_eq!(lc.set_reduced_motion(false, || Session::build(&host)), Phase::Active);
    assert_eq!(host.builds.get(), 2);
}

#[test]
fn preference_changes_are_ignored_after_unmount() {
    let (host, mut lc) = fixture(MotionPolicy::RespectReducedMotion);
    lc.mount(false, || Session::build(&host));
    lc.unmount();
    assert_eq!(lc.set_reduced_motion(true, || Session::build(&host)), Phase::Inactive);
    assert_eq!(lc.set_reduced_motion(false, || Session::build(&host)), Phase::Inactive);
    assert_eq!(host.builds.get(), 1);
    assert_eq!(host.attached(), (0, 0, 0));
}

#[test]
fn ignore_policy_disregards_the_preference() {
    let (host, mut lc) = fixture(MotionPolicy::Ignore);
    assert_eq!(lc.mount(true, || Session::build(&host)), Phase::Active);
    assert_eq!(lc.set_reduced_motion(true, || Session::build(&host)), Phase::Active);
    assert_eq!(host.attached(), (1, 1, 1));
}

#[test]
fn remounting_after_reduced_start_honours_the_new_preference() {
    let (host, mut lc) = fixture(MotionPolicy::RespectReducedMotion);
    lc.mount(true, || Session::build(&host));
    lc.unmount();
    assert_eq!(lc.mount(false, || Session::build(&host)), Phase::Active);
    assert_eq!(host.attached(), (1, 1, 1));
}

#[test]
fn failed_build_degrades_to_inactive() {
    let (host, mut lc) = fixture(MotionPolicy::Ignore);
    let phase = lc.mount(false, || -> Result<Session, String> {
        Err("2d context unavailable".to_string())
    });
    assert_eq!(phase, Phase::Inactive);
    assert!(lc.is_mounted());
    assert!(lc.session().is_none());
    lc.unmount();
    assert_eq!(host.attached(), (0, 0, 0));
}

#[test]
fn closed_gate_silences_pending_ticks() {
    let gate = TickGate::open();
    let ticks = Rc::new(Cell::new(0));
    let callback = {
        let gate = gate.clone();
        let ticks = ticks.clone();
        move || {
            if gate.is_open() {
                ticks.set(ticks.get() + 1);
            }
        }
    };
    callback();
    callback();
    gate.close();
    callback();
    assert_eq!(ticks.get(), 2);
    assert!(!gate.is_open());
}
