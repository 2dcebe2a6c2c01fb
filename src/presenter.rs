//! Terminal presentation of age reports.
//!
//! The presenter runs as its own task and only learns about results through
//! `Event` messages. Counter animation and the staggered fact reveal live
//! entirely here; the engine never waits on rendering.

use crate::age::AgeReport;
use crate::error::AgeError;
use crate::facts::{fun_facts, group_thousands};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

const CHANNEL_CAPACITY: usize = 16;
const CLEAR_LINE: &str = "\r\x1b[2K";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Report(AgeReport),
    Rejected(AgeError),
}

/// Count-up animation: `steps` equal increments spread over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub duration: Duration,
    pub steps: u32,
}

impl Default for CounterAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            steps: 30,
        }
    }
}

impl CounterAnimation {
    pub fn disabled() -> Self {
        Self {
            duration: Duration::ZERO,
            steps: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.steps > 0
    }

    fn step_interval(&self) -> Duration {
        if self.steps == 0 {
            Duration::ZERO
        } else {
            self.duration / self.steps
        }
    }

    /// Values shown while counting up to `value`. Never decreasing, and the
    /// last frame is always exactly `value`.
    pub fn frames(&self, value: u64) -> Vec<u64> {
        if !self.is_enabled() {
            return vec![value];
        }

        let target = value as f64;
        let increment = target / self.steps as f64;
        let mut current = 0.0;
        let mut frames = Vec::with_capacity(self.steps as usize + 1);

        loop {
            current += increment;
            if current >= target {
                frames.push(value);
                return frames;
            }
            frames.push(current.round() as u64);
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PresenterOptions {
    pub animation: CounterAnimation,
    /// Pause before each fun fact appears.
    pub fact_delay: Duration,
}

impl PresenterOptions {
    pub fn animated() -> Self {
        Self {
            animation: CounterAnimation::default(),
            fact_delay: Duration::from_millis(200),
        }
    }

    pub fn instant() -> Self {
        Self {
            animation: CounterAnimation::disabled(),
            fact_delay: Duration::ZERO,
        }
    }
}

pub struct Presenter<W> {
    out: W,
    options: PresenterOptions,
}

impl<W: Write + Send + 'static> Presenter<W> {
    pub fn new(out: W, options: PresenterOptions) -> Self {
        Self { out, options }
    }

    /// Start rendering on a background task. The task finishes once every
    /// sender is dropped and hands the writer back.
    pub fn spawn(self) -> (mpsc::Sender<Event>, JoinHandle<Result<W>>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let handle = tokio::spawn(self.run(rx));
        (tx, handle)
    }

    pub async fn run(mut self, mut events: mpsc::Receiver<Event>) -> Result<W> {
        while let Some(event) = events.recv().await {
            match event {
                Event::Report(report) => self.render_report(&report).await?,
                Event::Rejected(err) => self.render_rejection(&err)?,
            }
        }

        tracing::debug!("presenter channel closed");
        Ok(self.out)
    }

    async fn render_report(&mut self, report: &AgeReport) -> Result<()> {
        tracing::debug!(
            birth = %report.birth_date,
            total_days = report.total_days,
            "rendering age report"
        );

        self.animate_line(&[report.years as u64, report.months as u64, report.days as u64], |v| {
            format!("Age: {} years, {} months, {} days", v[0], v[1], v[2])
        })
        .await?;

        self.animate_line(
            &[report.total_days, report.total_hours, report.total_minutes],
            |v| {
                format!(
                    "Lived: {} days | {} hours | {} minutes",
                    group_thousands(v[0]),
                    group_thousands(v[1]),
                    group_thousands(v[2])
                )
            },
        )
        .await?;

        writeln!(
            self.out,
            "Next birthday: {} (in {} days)",
            report.next_anniversary.format("%B %-d, %Y"),
            report.days_until_anniversary
        )?;
        writeln!(self.out, "Zodiac sign: {}", report.zodiac_sign)?;

        let facts = fun_facts(report);
        if !facts.is_empty() {
            writeln!(self.out, "Fun facts:")?;
        }
        for fact in facts {
            if !self.options.fact_delay.is_zero() {
                sleep(self.options.fact_delay).await;
            }
            writeln!(self.out, "  • {fact}")?;
            self.out.flush()?;
        }
        writeln!(self.out)?;

        self.out.flush().context("Failed to flush presenter output")
    }

    /// Counts several values up together on one redrawn line, then leaves
    /// the final values in place.
    async fn animate_line<F>(&mut self, values: &[u64], render: F) -> Result<()>
    where
        F: Fn(&[u64]) -> String,
    {
        let animation = self.options.animation;
        if !animation.is_enabled() {
            writeln!(self.out, "{}", render(values))?;
            return Ok(());
        }

        let frames: Vec<Vec<u64>> = values.iter().map(|v| animation.frames(*v)).collect();
        let frame_count = frames.iter().map(Vec::len).max().unwrap_or(0);
        let mut ticker =
            tokio::time::interval(animation.step_interval().max(Duration::from_millis(1)));
        let mut current = vec![0; values.len()];

        for i in 0..frame_count {
            ticker.tick().await;
            for (slot, counter) in current.iter_mut().zip(&frames) {
                *slot = counter[i.min(counter.len() - 1)];
            }
            write!(self.out, "{CLEAR_LINE}{}", render(&current))?;
            self.out.flush()?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    fn render_rejection(&mut self, err: &AgeError) -> Result<()> {
        tracing::debug!("rejected input: {err}");
        writeln!(self.out, "error: {err}")?;
        self.out.flush().context("Failed to flush presenter output")
    }
}
