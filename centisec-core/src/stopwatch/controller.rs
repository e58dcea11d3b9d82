//! Stopwatch controller
//!
//! All mutable stopwatch state lives in one [`Stopwatch`] value. It must be
//! driven from a single loop; nothing here is shared.
//!
//! Every cycle:
//! 1. Render the current tick count across one full multiplex pass
//! 2. Advance the count by one if running
//! 3. Sample every button once
//! 4. Apply the confirmed presses
//!
//! Presses confirmed in the same poll are taken from one snapshot and
//! applied in button order (Start, Stop, Reset), so Start+Stop ends Stopped
//! and anything with Reset ends at (Stopped, 0). Once any of them changes
//! the state, every confirmed button is consumed: its windows are cleared
//! and, for Start and Reset, it joins the release latch.
//!
//! Release latching is the [`Phase::AwaitingRelease`] sub-state: buttons
//! are still sampled each cycle, but no press is acted on until the
//! latched button reads released. When Start and Reset are consumed
//! together, Start is awaited first and Reset after it.

use crate::config::{OverflowPolicy, StopwatchConfig};
use crate::debounce::{ButtonBank, ButtonId, WrappingIndex, DEFAULT_WINDOW};
use crate::display::{DigitRenderer, Frames, Multiplexer};
use crate::state::{Event, Phase, StopwatchState};
use crate::traits::{ButtonInputs, Delay, DisplayPorts};

use super::ticks::ElapsedTicks;

/// Transitions applied by one poll, in the order they happened
pub type Transitions = heapless::Vec<Transition, 3>;

/// A state change applied by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Press that caused it
    pub event: Event,
    /// State before
    pub from: StopwatchState,
    /// State after
    pub to: StopwatchState,
    /// Tick count after the transition
    pub elapsed: ElapsedTicks,
}

/// Start/stop/reset stopwatch on a multiplexed display
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stopwatch<const N: usize = DEFAULT_WINDOW> {
    /// Run state
    state: StopwatchState,
    /// Release latch
    phase: Phase,
    /// Button to await once the latched one is released
    queued_release: Option<ButtonId>,
    /// Elapsed hundredths
    ticks: ElapsedTicks,
    /// Per-button debouncers
    buttons: ButtonBank<N>,
    /// Digit decomposition
    renderer: DigitRenderer,
    /// Multiplex timing
    mux: Multiplexer,
    /// Counter overflow behavior
    overflow: OverflowPolicy,
}

impl<const N: usize> Stopwatch<N> {
    /// Create a stopped stopwatch at zero
    pub fn new(config: &StopwatchConfig) -> Self {
        Self {
            state: StopwatchState::Stopped,
            phase: Phase::Polling,
            queued_release: None,
            ticks: ElapsedTicks::ZERO,
            buttons: ButtonBank::new(),
            renderer: DigitRenderer::default(),
            mux: Multiplexer::new(config),
            overflow: config.overflow,
        }
    }

    /// Current run state
    pub fn state(&self) -> StopwatchState {
        self.state
    }

    /// Current release latch
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Elapsed hundredths of a second
    pub fn elapsed(&self) -> ElapsedTicks {
        self.ticks
    }

    /// Value the display shows
    pub fn display_value(&self) -> u32 {
        self.ticks.into()
    }

    /// Debouncer state for all buttons
    pub fn buttons(&self) -> &ButtonBank<N> {
        &self.buttons
    }

    /// Slot the next button poll writes to
    pub fn poll_index(&self) -> WrappingIndex<N> {
        self.buttons.poll_index()
    }

    /// Frames for the current tick count
    pub fn frames(&self) -> Frames {
        self.renderer.render(self.display_value())
    }

    /// Run one full cycle: refresh, tick, poll
    ///
    /// Returns the transitions applied by this cycle's poll.
    pub fn cycle<P, B, D>(
        &mut self,
        ports: &mut P,
        inputs: &mut B,
        delay: &mut D,
    ) -> Transitions
    where
        P: DisplayPorts,
        B: ButtonInputs,
        D: Delay,
    {
        self.refresh(ports, delay);
        self.tick();
        self.poll(inputs)
    }

    /// Show the current tick count once across every digit
    pub fn refresh<P: DisplayPorts, D: Delay>(&self, ports: &mut P, delay: &mut D) {
        self.mux.refresh(self.frames(), ports, delay);
    }

    /// Advance the counter by one refresh period if running
    ///
    /// Returns `true` if the counter changed.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let before = self.ticks;
        self.ticks.increment(self.overflow);
        self.ticks != before
    }

    /// Sample every button once and apply the confirmed presses
    pub fn poll<B: ButtonInputs>(&mut self, inputs: &mut B) -> Transitions {
        let mut raw = [false; 3];
        self.buttons.sample_all(|id| {
            raw[id.index()] = inputs.is_pressed(id);
            raw[id.index()]
        });

        if let Phase::AwaitingRelease(id) = self.phase {
            if !raw[id.index()] {
                self.phase = match self.queued_release.take() {
                    Some(next) if raw[next.index()] => Phase::AwaitingRelease(next),
                    _ => Phase::Polling,
                };
            }
            return Transitions::new();
        }

        // Snapshot before any window is cleared
        let confirmed = ButtonId::ALL.map(|id| self.buttons.confirmed(id));

        let mut transitions = Transitions::new();
        for id in ButtonId::ALL {
            let event = Event::from(id);
            if confirmed[id.index()] && self.state.accepts(event) {
                // At most one event per button, so this never overflows
                let _ = transitions.push(self.apply(event));
            }
        }

        if !transitions.is_empty() {
            for id in ButtonId::ALL {
                if confirmed[id.index()] {
                    self.consume(Event::from(id));
                }
            }
        }

        transitions
    }

    /// Apply one confirmed press to the state and counter
    fn apply(&mut self, event: Event) -> Transition {
        let from = self.state;
        self.state = from.transition(event);

        if event.resets_counter() {
            self.ticks.reset();
        }

        Transition {
            event,
            from,
            to: self.state,
            elapsed: self.ticks,
        }
    }

    /// Clear the windows of a confirmed press and latch it if edge-triggered
    ///
    /// Called once the poll's transitions have all been applied, so the
    /// state, windows and latch are consistent again before the next poll.
    fn consume(&mut self, event: Event) {
        for &id in event.clears() {
            self.buttons.clear(id);
        }

        if !event.awaits_release() {
            return;
        }
        match self.phase {
            Phase::Polling => self.phase = Phase::AwaitingRelease(event.button()),
            Phase::AwaitingRelease(first) if first != event.button() => {
                self.queued_release = Some(event.button());
            }
            Phase::AwaitingRelease(_) => {}
        }
    }

    /// Button awaited after the currently latched one, if any
    pub fn queued_release(&self) -> Option<ButtonId> {
        self.queued_release
    }

    /// Whether `id` is the button currently latched
    pub fn is_latched(&self, id: ButtonId) -> bool {
        self.phase == Phase::AwaitingRelease(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::multiplex::mock::{MockDelay, Recorder};
    use crate::display::SEGMENT_MAP;
    use crate::stopwatch::MAX_TICKS;
    use proptest::prelude::*;

    /// Buttons held according to a fixed mask
    #[derive(Default)]
    struct MockButtons {
        start: bool,
        stop: bool,
        reset: bool,
        reads: usize,
    }

    impl MockButtons {
        fn press(&mut self, id: ButtonId) {
            self.set(id, true);
        }

        fn release_all(&mut self) {
            self.start = false;
            self.stop = false;
            self.reset = false;
        }

        fn set(&mut self, id: ButtonId, pressed: bool) {
            match id {
                ButtonId::Start => self.start = pressed,
                ButtonId::Stop => self.stop = pressed,
                ButtonId::Reset => self.reset = pressed,
            }
        }
    }

    impl ButtonInputs for MockButtons {
        fn is_pressed(&mut self, id: ButtonId) -> bool {
            self.reads += 1;
            match id {
                ButtonId::Start => self.start,
                ButtonId::Stop => self.stop,
                ButtonId::Reset => self.reset,
            }
        }
    }

    fn stopwatch() -> Stopwatch<5> {
        Stopwatch::new(&StopwatchConfig::default())
    }

    /// Poll `times` times, returning every transition produced
    fn poll_n(sw: &mut Stopwatch<5>, buttons: &mut MockButtons, times: usize) -> Vec<Transition> {
        (0..times).flat_map(|_| sw.poll(buttons)).collect()
    }

    /// Press Start for a full window, then release it
    fn start(sw: &mut Stopwatch<5>, buttons: &mut MockButtons) {
        buttons.press(ButtonId::Start);
        poll_n(sw, buttons, 5);
        buttons.release_all();
        sw.poll(buttons);
        assert_eq!(sw.state(), StopwatchState::Running);
        assert_eq!(sw.phase(), Phase::Polling);
    }

    #[test]
    fn test_initial_state() {
        let sw = stopwatch();
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.phase(), Phase::Polling);
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
    }

    #[test]
    fn test_start_then_stop() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        buttons.press(ButtonId::Start);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(
            transitions,
            [Transition {
                event: Event::Start,
                from: StopwatchState::Stopped,
                to: StopwatchState::Running,
                elapsed: ElapsedTicks::ZERO,
            }]
        );
        assert_eq!(sw.state(), StopwatchState::Running);
        assert!(sw.is_latched(ButtonId::Start));

        for _ in 0..7 {
            sw.tick();
        }
        let reached = sw.elapsed();
        assert_eq!(reached.get(), 7);

        buttons.release_all();
        buttons.press(ButtonId::Stop);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].event, Event::Stop);
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.elapsed(), reached);
        // Stop does not latch
        assert_eq!(sw.phase(), Phase::Polling);
    }

    #[test]
    fn test_reset_while_running() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();
        start(&mut sw, &mut buttons);

        for _ in 0..42 {
            sw.tick();
        }
        assert_eq!(sw.elapsed().get(), 42);

        buttons.press(ButtonId::Reset);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from, StopwatchState::Running);
        assert_eq!(transitions[0].to, StopwatchState::Stopped);
        assert_eq!(transitions[0].elapsed, ElapsedTicks::ZERO);
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
        assert!(sw.is_latched(ButtonId::Reset));
    }

    #[test]
    fn test_reset_while_stopped() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();
        start(&mut sw, &mut buttons);
        for _ in 0..30 {
            sw.tick();
        }
        buttons.press(ButtonId::Stop);
        poll_n(&mut sw, &mut buttons, 5);
        buttons.release_all();
        assert_eq!(sw.elapsed().get(), 30);

        buttons.press(ButtonId::Reset);
        poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
    }

    #[test]
    fn test_ticks_only_while_running() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        for _ in 0..10 {
            assert!(!sw.tick());
        }
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);

        start(&mut sw, &mut buttons);
        for expected in 1..=10 {
            assert!(sw.tick());
            assert_eq!(sw.elapsed().get(), expected);
        }
    }

    #[test]
    fn test_held_start_does_not_refire() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        buttons.press(ButtonId::Start);
        let transitions = poll_n(&mut sw, &mut buttons, 50);
        assert_eq!(transitions.len(), 1);
        assert!(sw.is_latched(ButtonId::Start));

        // Counter runs while the button is still held
        assert!(sw.tick());

        buttons.release_all();
        assert!(sw.poll(&mut buttons).is_empty());
        assert_eq!(sw.phase(), Phase::Polling);
        assert_eq!(sw.state(), StopwatchState::Running);
    }

    #[test]
    fn test_presses_ignored_while_latched() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        buttons.press(ButtonId::Start);
        poll_n(&mut sw, &mut buttons, 5);

        // Stop confirms while Start is still held: ignored
        buttons.press(ButtonId::Stop);
        assert!(poll_n(&mut sw, &mut buttons, 10).is_empty());
        assert_eq!(sw.state(), StopwatchState::Running);

        // Releasing Start unlatches; Stop's full window applies next poll
        buttons.set(ButtonId::Start, false);
        assert!(sw.poll(&mut buttons).is_empty());
        let transitions = sw.poll(&mut buttons);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].event, Event::Stop);
        assert_eq!(sw.state(), StopwatchState::Stopped);
    }

    #[test]
    fn test_held_stop_is_level_sensitive() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();
        start(&mut sw, &mut buttons);

        buttons.press(ButtonId::Stop);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(transitions.len(), 1);
        assert_eq!(sw.phase(), Phase::Polling);

        // Still holding Stop: it keeps confirming but has no effect when stopped
        assert!(poll_n(&mut sw, &mut buttons, 20).is_empty());
        assert!(sw.buttons().confirmed(ButtonId::Stop));

        // Start confirms while Stop is still held: both apply, Stop last
        buttons.press(ButtonId::Start);
        let events: Vec<Event> = poll_n(&mut sw, &mut buttons, 5)
            .iter()
            .map(|t| t.event)
            .collect();
        assert_eq!(events, [Event::Start, Event::Stop]);
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert!(!sw.buttons().confirmed(ButtonId::Stop));
        assert!(sw.is_latched(ButtonId::Start));
    }

    #[test]
    fn test_start_clears_start_and_stop_windows() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        // Stop joins for the last three samples, short of a full window
        buttons.press(ButtonId::Start);
        poll_n(&mut sw, &mut buttons, 2);
        buttons.press(ButtonId::Stop);
        poll_n(&mut sw, &mut buttons, 2);
        assert_eq!(sw.buttons().get(ButtonId::Stop).window().pressed_count(), 2);

        let transitions = sw.poll(&mut buttons);
        assert_eq!(transitions.len(), 1);
        assert_eq!(sw.state(), StopwatchState::Running);
        assert_eq!(sw.buttons().get(ButtonId::Start).window().pressed_count(), 0);
        assert_eq!(sw.buttons().get(ButtonId::Stop).window().pressed_count(), 0);
    }

    #[test]
    fn test_start_and_stop_together_end_stopped() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        buttons.press(ButtonId::Start);
        buttons.press(ButtonId::Stop);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].event, Event::Start);
        assert_eq!(transitions[1].event, Event::Stop);
        assert_eq!(transitions[1].to, StopwatchState::Stopped);
        assert_eq!(sw.state(), StopwatchState::Stopped);

        // Releasing both does not start anything
        buttons.release_all();
        assert!(poll_n(&mut sw, &mut buttons, 10).is_empty());
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.phase(), Phase::Polling);
    }

    #[test]
    fn test_stop_with_held_start_while_running() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();
        start(&mut sw, &mut buttons);

        // Start is ignored while running but is consumed by the Stop
        buttons.press(ButtonId::Start);
        buttons.press(ButtonId::Stop);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].event, Event::Stop);
        assert!(sw.is_latched(ButtonId::Start));

        buttons.set(ButtonId::Stop, false);
        assert!(poll_n(&mut sw, &mut buttons, 10).is_empty());
        assert_eq!(sw.state(), StopwatchState::Stopped);
    }

    #[test]
    fn test_start_and_reset_together() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        buttons.press(ButtonId::Start);
        buttons.press(ButtonId::Reset);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].event, Event::Start);
        assert_eq!(transitions[1].event, Event::Reset);
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
        assert_eq!(sw.buttons().get(ButtonId::Start).window().pressed_count(), 0);
        assert!(sw.is_latched(ButtonId::Start));
        assert_eq!(sw.queued_release(), Some(ButtonId::Reset));

        // Reset let go first; Start still held must not restart the watch
        buttons.set(ButtonId::Reset, false);
        assert!(poll_n(&mut sw, &mut buttons, 10).is_empty());
        assert!(sw.is_latched(ButtonId::Start));

        buttons.set(ButtonId::Start, false);
        assert!(poll_n(&mut sw, &mut buttons, 10).is_empty());
        assert_eq!(sw.phase(), Phase::Polling);
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
    }

    #[test]
    fn test_reset_with_held_start_awaits_both() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();
        start(&mut sw, &mut buttons);
        for _ in 0..25 {
            sw.tick();
        }

        buttons.press(ButtonId::Start);
        buttons.press(ButtonId::Reset);
        let transitions = poll_n(&mut sw, &mut buttons, 5);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].event, Event::Reset);
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);

        // Start released first, Reset still held: now Reset is awaited
        buttons.set(ButtonId::Start, false);
        assert!(sw.poll(&mut buttons).is_empty());
        assert!(sw.is_latched(ButtonId::Reset));
        assert_eq!(sw.queued_release(), None);

        buttons.set(ButtonId::Reset, false);
        assert!(sw.poll(&mut buttons).is_empty());
        assert_eq!(sw.phase(), Phase::Polling);
        assert!(poll_n(&mut sw, &mut buttons, 10).is_empty());
        assert_eq!(sw.state(), StopwatchState::Stopped);
    }

    #[test]
    fn test_bounce_delays_confirmation() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();

        buttons.press(ButtonId::Start);
        poll_n(&mut sw, &mut buttons, 4);
        buttons.set(ButtonId::Start, false);
        sw.poll(&mut buttons);
        buttons.press(ButtonId::Start);
        assert!(poll_n(&mut sw, &mut buttons, 4).is_empty());
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert!(!sw.poll(&mut buttons).is_empty());
    }

    #[test]
    fn test_cycle_renders_then_ticks_then_polls() {
        let mut sw = stopwatch();
        let mut ports = Recorder::default();
        let mut delay = MockDelay::default();
        let mut buttons = MockButtons::default();

        buttons.press(ButtonId::Start);
        for _ in 0..5 {
            assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
            sw.cycle(&mut ports, &mut buttons, &mut delay);
        }
        assert_eq!(sw.state(), StopwatchState::Running);
        // The cycle that confirmed Start ticked before polling
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);

        for expected in 1..=12 {
            sw.cycle(&mut ports, &mut buttons, &mut delay);
            assert_eq!(sw.elapsed().get(), expected);
        }

        ports.writes.clear();
        sw.refresh(&mut ports, &mut delay);
        assert_eq!(
            ports.lit_frames(),
            [
                (SEGMENT_MAP[2], 0b1000),
                (SEGMENT_MAP[1], 0b0100),
                (SEGMENT_MAP[0], 0b0010),
                (SEGMENT_MAP[0], 0b0001),
            ]
        );
        assert_eq!(delay.calls.len(), 18 * 4);
        assert_eq!(buttons.reads, 17 * 3);
    }

    #[test]
    fn test_saturating_counter_holds() {
        let config = StopwatchConfig {
            overflow: OverflowPolicy::Saturate,
            ..StopwatchConfig::default()
        };
        let mut sw: Stopwatch<5> = Stopwatch::new(&config);
        let mut buttons = MockButtons::default();
        start(&mut sw, &mut buttons);

        for _ in 0..MAX_TICKS {
            sw.tick();
        }
        assert_eq!(sw.elapsed().get(), MAX_TICKS);
        assert!(!sw.tick());
        assert_eq!(sw.display_value(), MAX_TICKS as u32);
    }

    #[test]
    fn test_wrapping_counter_rolls_over() {
        let mut sw = stopwatch();
        let mut buttons = MockButtons::default();
        start(&mut sw, &mut buttons);

        for _ in 0..=MAX_TICKS {
            sw.tick();
        }
        assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
    }

    proptest! {
        /// For any input sequence: the poll index stays in range, the counter
        /// moves by exactly one per cycle iff running, and a Reset always
        /// lands on (Stopped, 0).
        #[test]
        fn prop_cycle_invariants(
            inputs in proptest::collection::vec(any::<(bool, bool, bool)>(), 1..400),
        ) {
            let mut sw = stopwatch();
            let mut ports = Recorder::default();
            let mut delay = MockDelay::default();
            let mut buttons = MockButtons::default();

            for (start, stop, reset) in inputs {
                buttons.start = start;
                buttons.stop = stop;
                buttons.reset = reset;

                let before = sw.elapsed().get();
                let running = sw.state().is_running();

                sw.refresh(&mut ports, &mut delay);
                sw.tick();
                let after_tick = sw.elapsed().get();
                if running {
                    prop_assert_eq!(after_tick, (before + 1) % 10_000);
                } else {
                    prop_assert_eq!(after_tick, before);
                }

                let transitions = sw.poll(&mut buttons);
                prop_assert!(sw.poll_index().get() < 5);

                if transitions.iter().any(|t| t.event == Event::Reset) {
                    prop_assert_eq!(sw.state(), StopwatchState::Stopped);
                    prop_assert_eq!(sw.elapsed(), ElapsedTicks::ZERO);
                } else {
                    prop_assert_eq!(sw.elapsed().get(), after_tick);
                }
                if let Some(last) = transitions.last() {
                    prop_assert_eq!(last.to, sw.state());
                }
                ports.writes.clear();
            }
        }
    }
}
