//! Core application state

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::anim::{Gauge, OneShot, Reveal, Typewriter};
use crate::config::Config;
use crate::content::Portfolio;

use super::form::ContactForm;
use super::settings::Settings;

/// How long the contact confirmation notice stays up before auto-hiding.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3500);

/// Scroll offset past which the navbar switches to its "scrolled" style.
pub const SCROLLED_THRESHOLD: usize = 3;

/// Redraw cadence while a continuous animation (reveal ramp, gauge fill)
/// is in flight.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// The portfolio's content sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    /// Name, typed role line, social links.
    Hero,
    /// Biography and education.
    About,
    /// Technical bars, soft skills, tools.
    Skills,
    /// Certifications.
    Certifications,
    /// Work experience.
    Experience,
    /// Projects.
    Projects,
    /// Contact channels and the message form.
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: &'static [Self] = &[
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Certifications,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// Display title used in the navbar and section headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hero => "Profile",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Certifications => "Certifications",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Position in [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }
}

/// Input mode of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the document.
    #[default]
    Normal,
    /// Editing the contact form.
    Compose,
    /// Help overlay.
    Help,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,
    /// Persisted user settings
    pub settings: Settings,
    /// Portfolio content being presented
    pub content: Portfolio,
    /// Current input mode
    pub mode: Mode,
    /// Document scroll offset (index of the first visible line)
    pub scroll: usize,
    /// Document viewport size (width, height)
    pub viewport: (u16, u16),
    /// Contact form state
    pub form: ContactForm,
    /// Status message shown in the status bar
    pub status_message: Option<String>,
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Typed role line in the hero section
    pub typewriter: Typewriter,
    /// One reveal latch per section, indexed like [`SectionId::ALL`]
    pub reveals: Vec<Reveal>,
    /// One fill gauge per technical skill, in content order
    pub gauges: Vec<Gauge>,
    /// Auto-hide deadline for the contact confirmation notice
    pub notice: OneShot,

    /// Line offsets where each section starts, indexed like
    /// [`SectionId::ALL`]; refreshed by the layout pass each frame
    section_starts: Vec<usize>,
    /// Total document height in lines, refreshed with the starts
    document_lines: usize,
}

impl App {
    /// Create the application state.
    ///
    /// Validates `content` and builds the animators from it. With reduced
    /// motion enabled in `settings`, every animator starts pre-completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails validation.
    pub fn new(
        config: Config,
        settings: Settings,
        content: Portfolio,
        now: Instant,
    ) -> Result<Self> {
        content.validate()?;
        let typewriter = Typewriter::new(content.profile.roles.clone(), now)?;
        let reveals = vec![Reveal::new(config.reveal_threshold); SectionId::ALL.len()];
        let gauges = content
            .skills
            .technical
            .iter()
            .enumerate()
            .map(|(i, skill)| Gauge::staggered(skill.percent, i))
            .collect();

        let mut app = Self {
            config,
            settings,
            content,
            mode: Mode::Normal,
            scroll: 0,
            viewport: (80, 24),
            form: ContactForm::default(),
            status_message: None,
            should_quit: false,
            typewriter,
            reveals,
            gauges,
            notice: OneShot::idle(),
            section_starts: vec![0; SectionId::ALL.len()],
            document_lines: 0,
        };
        if app.settings.reduce_motion {
            app.complete_animations(now);
        }
        Ok(app)
    }

    /// Record the document layout computed for the current frame.
    ///
    /// `ranges` holds `(start, len)` per section, parallel to
    /// [`SectionId::ALL`]; `total` is the document height in lines.
    pub fn set_layout(&mut self, ranges: &[(usize, usize)], total: usize) {
        self.section_starts = ranges.iter().map(|&(start, _)| start).collect();
        self.document_lines = total;
        // A resize can shrink the document under the current offset.
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Total document height in lines.
    #[must_use]
    pub const fn document_lines(&self) -> usize {
        self.document_lines
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.document_lines
            .saturating_sub(usize::from(self.viewport.1))
    }

    /// Whether the navbar should use its "scrolled" style.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scroll > SCROLLED_THRESHOLD
    }

    /// The section at the top of the viewport.
    ///
    /// At the very bottom the last section wins: its start can never
    /// reach the top once the document tail is on screen.
    #[must_use]
    pub fn current_section(&self) -> SectionId {
        if self.scroll > 0 && self.scroll >= self.max_scroll() {
            return SectionId::ALL.last().copied().unwrap_or(SectionId::Hero);
        }
        let mut current = SectionId::Hero;
        for (i, &start) in self.section_starts.iter().enumerate() {
            if start <= self.scroll
                && let Some(&id) = SectionId::ALL.get(i)
            {
                current = id;
            }
        }
        current
    }

    /// Scroll up by `amount` lines.
    pub const fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Scroll down by `amount` lines, clamped to the document end.
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
    }

    /// Jump to the top of the document.
    pub const fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump to the bottom of the document.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Half the viewport height, minimum one line.
    #[must_use]
    pub fn half_page(&self) -> usize {
        usize::from(self.viewport.1 / 2).max(1)
    }

    /// Jump so `section` starts at the top of the viewport.
    pub fn jump_to_section(&mut self, section: SectionId) {
        let start = self
            .section_starts
            .get(section.index())
            .copied()
            .unwrap_or(0);
        self.scroll = start.min(self.max_scroll());
    }

    /// Jump to the section after the current one.
    pub fn next_section(&mut self) {
        let next = (self.current_section().index() + 1).min(SectionId::ALL.len() - 1);
        if let Some(&id) = SectionId::ALL.get(next) {
            self.jump_to_section(id);
        }
    }

    /// Jump to the section before the current one.
    pub fn prev_section(&mut self) {
        let index = self.current_section().index();
        // Inside a section, first snap back to its own start.
        let at_start = self
            .section_starts
            .get(index)
            .is_some_and(|&start| start == self.scroll);
        let target = if at_start { index.saturating_sub(1) } else { index };
        if let Some(&id) = SectionId::ALL.get(target) {
            self.jump_to_section(id);
        }
    }

    /// Feed every section's visible fraction to its reveal latch and
    /// start the skill gauges when the skills section fires.
    ///
    /// `ranges` is `(start, len)` per section, parallel to
    /// [`SectionId::ALL`].
    pub fn observe_visibility(&mut self, ranges: &[(usize, usize)], now: Instant) {
        let top = self.scroll;
        let bottom = self.scroll + usize::from(self.viewport.1);

        for (i, &(start, len)) in ranges.iter().enumerate() {
            let end = start + len;
            let overlap = end.min(bottom).saturating_sub(start.max(top));
            let visible = fraction(overlap, len);
            if let Some(reveal) = self.reveals.get_mut(i) {
                reveal.observe(visible, now);
            }
        }

        let skills_fired = self
            .reveals
            .get(SectionId::Skills.index())
            .is_some_and(Reveal::has_fired);
        if skills_fired {
            for gauge in &mut self.gauges {
                gauge.start(now);
            }
        }
    }

    /// Advance time-driven state: the typewriter and the notice timer.
    pub fn step(&mut self, now: Instant) {
        self.typewriter.poll(now);
        self.notice.fire(now);
    }

    /// The earliest instant anything on screen changes on its own.
    ///
    /// Returns `None` when fully quiescent; the event loop then polls at
    /// its idle cadence.
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let mut deadline = self.typewriter.next_deadline();
        if let Some(due) = self.notice.due() {
            deadline = Some(deadline.map_or(due, |d| d.min(due)));
        }
        if self.has_running_ramp(now) {
            let frame = now + FRAME_INTERVAL;
            deadline = Some(deadline.map_or(frame, |d| d.min(frame)));
        }
        deadline
    }

    /// Whether any reveal entrance or gauge fill is mid-ramp.
    fn has_running_ramp(&self, now: Instant) -> bool {
        let reveal_running = self
            .reveals
            .iter()
            .any(|r| r.has_fired() && r.progress(now) < 1.0);
        let gauge_running = self
            .gauges
            .iter()
            .any(|g| g.is_started() && !g.is_full(now));
        reveal_running || gauge_running
    }

    /// Complete every animation immediately (reduced motion).
    pub fn complete_animations(&mut self, now: Instant) {
        self.typewriter.freeze();
        for reveal in &mut self.reveals {
            reveal.force(now);
        }
        for gauge in &mut self.gauges {
            gauge.force(now);
        }
    }

    /// Restart the animations from scratch (reduced motion switched off).
    ///
    /// # Errors
    ///
    /// Never fails in practice: the role list was validated at startup.
    pub fn restart_animations(&mut self, now: Instant) -> Result<()> {
        self.typewriter = Typewriter::new(self.content.profile.roles.clone(), now)?;
        self.reveals = vec![Reveal::new(self.config.reveal_threshold); SectionId::ALL.len()];
        self.gauges = self
            .content
            .skills
            .technical
            .iter()
            .enumerate()
            .map(|(i, skill)| Gauge::staggered(skill.percent, i))
            .collect();
        Ok(())
    }

    /// Enter a mode, clearing transient state the mode owns.
    pub fn enter_mode(&mut self, mode: Mode) {
        if mode == Mode::Compose {
            self.status_message = None;
        }
        self.mode = mode;
    }

    /// Return to [`Mode::Normal`].
    pub fn exit_mode(&mut self) {
        if self.mode == Mode::Compose {
            self.form.clear();
        }
        self.mode = Mode::Normal;
    }
}

/// Visible fraction of a section, `overlap / len` in `[0.0, 1.0]`.
fn fraction(overlap: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let overlap = u32::try_from(overlap).unwrap_or(u32::MAX);
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    f64::from(overlap) / f64::from(len)
}
