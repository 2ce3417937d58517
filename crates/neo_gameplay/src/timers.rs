//! Single-shot delayed callbacks (combo cooldown, invincibility release,
//! death → respawn, enemy combo rest).
//!
//! Один таймер на пару (owner, kind): повторный schedule перезапускает его,
//! как переиспользование одного timer handle на акторе.
//! Expired timers are delivered as `TimerFired` events in schedule order.

use std::time::Duration;

use bevy::prelude::*;

/// What a timer is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum TimerKind {
    /// Last combo section played → reset to Idle
    ComboCooldown,
    /// Post-hit invincibility window ends
    InvincibilityRelease,
    /// Death animation done → respawn or game over
    DeathToRespawn,
    /// Enemy rest after the third combo step
    EnemyComboCooldown,
}

/// Событие: таймер истёк
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub owner: Entity,
    pub kind: TimerKind,
}

#[derive(Debug, Clone)]
struct ScheduledTimer {
    owner: Entity,
    kind: TimerKind,
    timer: Timer,
}

/// Shared timer facility.
#[derive(Resource, Debug, Default)]
pub struct GameTimers {
    pending: Vec<ScheduledTimer>,
}

impl GameTimers {
    /// Schedule (or restart) the `(owner, kind)` timer.
    pub fn schedule(&mut self, owner: Entity, kind: TimerKind, seconds: f32) {
        self.cancel(owner, kind);
        self.pending.push(ScheduledTimer {
            owner,
            kind,
            timer: Timer::from_seconds(seconds.max(0.0), TimerMode::Once),
        });
    }

    /// Returns true if a pending timer was removed.
    pub fn cancel(&mut self, owner: Entity, kind: TimerKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| !(t.owner == owner && t.kind == kind));
        before != self.pending.len()
    }

    pub fn cancel_all(&mut self, owner: Entity) {
        self.pending.retain(|t| t.owner != owner);
    }

    pub fn is_pending(&self, owner: Entity, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.owner == owner && t.kind == kind)
    }

    /// Seconds left on a pending timer.
    pub fn remaining(&self, owner: Entity, kind: TimerKind) -> Option<f32> {
        self.pending
            .iter()
            .find(|t| t.owner == owner && t.kind == kind)
            .map(|t| t.timer.remaining_secs())
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance every timer by `delta`, removing and returning the expired ones.
    pub fn advance(&mut self, delta: Duration) -> Vec<TimerFired> {
        let mut fired = Vec::new();

        for scheduled in self.pending.iter_mut() {
            scheduled.timer.tick(delta);
            if scheduled.timer.finished() {
                fired.push(TimerFired {
                    owner: scheduled.owner,
                    kind: scheduled.kind,
                });
            }
        }

        self.pending.retain(|t| !t.timer.finished());
        fired
    }
}

/// System: tick shared timers (FixedUpdate, runs first).
pub fn tick_game_timers(
    mut timers: ResMut<GameTimers>,
    time: Res<Time<Fixed>>,
    mut fired_events: EventWriter<TimerFired>,
) {
    for fired in timers.advance(time.delta()) {
        crate::logger::log(&format!(
            "⏱️ Timer fired: {:?} (owner: {:?})",
            fired.kind, fired.owner
        ));
        fired_events.write(fired);
    }
}
