//! Event loop driving one carousel instance.
//!
//! Every input (commands from the front end and autoplay ticks) is
//! serialized through a single tokio task, so transitions never overlap.
//! The latest [`CarouselView`] is published on a `watch` channel.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::carousel::autoplay::AutoplayTimer;
use crate::carousel::state::{Carousel, CarouselView};
use crate::event::CarouselCommand;

const COMMAND_BUFFER: usize = 64;

/// Spawner for carousel event loops.
pub struct CarouselSession;

impl CarouselSession {
    /// Starts the event loop for `carousel` with the given autoplay period.
    ///
    /// The loop ends, cancelling its timer, when the returned handle is shut
    /// down or dropped. Must be called from within a tokio runtime.
    pub fn spawn(carousel: Carousel, autoplay_period: Duration) -> CarouselHandle {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (view_tx, view_rx) = watch::channel(carousel.view());
        let task = tokio::spawn(run(carousel, autoplay_period, command_rx, view_tx));

        CarouselHandle {
            commands: command_tx,
            view: view_rx,
            task,
        }
    }
}

/// Owner's side of a running carousel session.
#[derive(Debug)]
pub struct CarouselHandle {
    commands: mpsc::Sender<CarouselCommand>,
    view: watch::Receiver<CarouselView>,
    task: JoinHandle<()>,
}

impl CarouselHandle {
    /// Queues `command`. Returns `false` if the session has already ended.
    pub async fn send(&self, command: CarouselCommand) -> bool {
        self.commands.send(command).await.is_ok()
    }

    /// The most recently published view.
    pub fn view(&self) -> CarouselView {
        *self.view.borrow()
    }

    /// A receiver notified whenever the view changes.
    pub fn subscribe(&self) -> watch::Receiver<CarouselView> {
        self.view.clone()
    }

    /// Stops the loop and waits for it to finish.
    pub async fn shutdown(self) {
        drop(self.commands);
        if let Err(e) = self.task.await {
            tracing::warn!("carousel session ended abnormally: {e}");
        }
    }
}

async fn run(
    mut state: Carousel,
    autoplay_period: Duration,
    mut commands: mpsc::Receiver<CarouselCommand>,
    view_tx: watch::Sender<CarouselView>,
) {
    let (tick_tx, mut ticks) = mpsc::channel::<u64>(1);
    let mut timer = AutoplayTimer::new(autoplay_period);
    sync_timer(&mut timer, &state, &tick_tx);

    tracing::debug!(
        items = state.item_count(),
        per_view = state.items_per_view(),
        "carousel session started"
    );

    loop {
        let command = tokio::select! {
            command = commands.recv() => match command {
                Some(command) => command,
                None => break,
            },
            Some(generation) = ticks.recv() => {
                if !timer.is_armed() || generation != timer.generation() {
                    continue;
                }
                CarouselCommand::Tick
            }
        };

        let before = state.current_index();
        state = state.apply(command);
        if state.current_index() != before {
            tracing::debug!(?command, from = before, to = state.current_index(), "carousel moved");
        }

        sync_timer(&mut timer, &state, &tick_tx);

        let view = state.view();
        view_tx.send_if_modified(|current| {
            if *current == view {
                return false;
            }
            *current = view;
            true
        });
    }

    timer.cancel();
    tracing::debug!("carousel session stopped");
}

/// Arms the timer on a resume edge and cancels it on a pause edge.
///
/// Autoplay runs only while the carousel is unpaused and has somewhere to go.
fn sync_timer(timer: &mut AutoplayTimer, state: &Carousel, tick_tx: &mpsc::Sender<u64>) {
    let wanted = !state.is_paused() && state.can_navigate() && !timer.period().is_zero();
    if wanted && !timer.is_armed() {
        timer.arm(tick_tx.clone());
    } else if !wanted && timer.is_armed() {
        timer.cancel();
    }
}
