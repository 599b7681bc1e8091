// run_loop.rs - Fixed-period stepping with start/stop semantics
//
// The timer is a tokio task that posts ticks onto a one-slot channel. The
// owner of the grid drains that channel on its own thread, so stepping never
// leaves the thread that owns the simulation. While the slot is full further
// ticks are dropped: an owner that stops draining gets one step, not a backlog.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Called from the timer task on every tick, whether or not the slot was free.
pub type TickWaker = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    epoch: u64,
}

/// The one active timer.
pub struct TimerHandle {
    epoch: u64,
    task: JoinHandle<()>,
}

pub enum RunState {
    Stopped,
    Running(TimerHandle),
}

pub struct RunLoop {
    state: RunState,
    period: Duration,
    // Bumped on every start; ticks from an older timer are ignored.
    epoch: u64,
    runtime: Handle,
    tx: Sender<Tick>,
    rx: Receiver<Tick>,
    waker: Option<TickWaker>,
}

impl RunLoop {
    pub fn new(runtime: Handle, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        Self {
            state: RunState::Stopped,
            period,
            epoch: 0,
            runtime,
            tx,
            rx,
            waker: None,
        }
    }

    pub fn set_waker(&mut self, waker: TickWaker) {
        self.waker = Some(waker);
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running(_))
    }

    /// Begin ticking every `period`. Returns `false` if a timer was already active.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.discard_pending();
        self.epoch += 1;
        let epoch = self.epoch;
        let period = self.period;
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        let task = self.runtime.spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match tx.try_send(Tick { epoch }) {
                    Ok(()) => log::trace!("tick posted (epoch {epoch})"),
                    Err(TrySendError::Full(_)) => log::trace!("tick coalesced (epoch {epoch})"),
                    Err(TrySendError::Closed(_)) => break,
                }
                if let Some(wake) = &waker {
                    wake();
                }
            }
        });

        self.state = RunState::Running(TimerHandle { epoch, task });
        log::info!("run loop started, period {:?}", self.period);
        true
    }

    /// Cancel the active timer. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        match std::mem::replace(&mut self.state, RunState::Stopped) {
            RunState::Running(timer) => {
                timer.task.abort();
                log::info!("run loop stopped");
                true
            }
            RunState::Stopped => false,
        }
    }

    /// Run/pause toggle. Returns whether the loop is running afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Number of ticks delivered by the current timer since the last call,
    /// at most one.
    ///
    /// Ticks queued by a timer that has since been stopped are dropped here.
    pub fn take_due(&mut self) -> usize {
        let mut due = 0;
        while let Ok(tick) = self.rx.try_recv() {
            match &self.state {
                RunState::Running(timer) if timer.epoch == tick.epoch => due += 1,
                _ => log::trace!("dropping stale tick (epoch {})", tick.epoch),
            }
        }
        due
    }

    /// Drop whatever an earlier timer left in the slot.
    fn discard_pending(&mut self) {
        while let Ok(tick) = self.rx.try_recv() {
            log::trace!("discarding pending tick (epoch {})", tick.epoch);
        }
    }
}

impl Drop for RunLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
