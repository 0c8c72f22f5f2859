//! Terminal shell: renders a `Report` as text with ANSI colours.

use crate::config::Config;
use crate::core::filter::Selection;
use crate::core::view::{DetailedTable, OverviewData, Panel, Report, TopicProgressLine};
use crate::utils::colors::{self, GREY, RESET};
use crate::utils::formatting::{bar, bold, pad_left, pad_right, visible_width};
use crate::utils::table::{Column, Table};
use std::fmt::Write;

const NO_DATA: &str = "No data for the current selection. Adjust the topic or status filters.";

pub struct TerminalRenderer<'a> {
    cfg: &'a Config,
    color: bool,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(cfg: &'a Config, color: bool) -> Self {
        Self { cfg, color }
    }

    pub fn render(&self, report: &Report, selection: &Selection) -> String {
        let mut out = String::new();

        // ---------------------------
        // Page chrome
        // ---------------------------
        let _ = writeln!(out, "{}", self.bold(&format!("📊 {}", self.cfg.page_title)));
        let _ = writeln!(
            out,
            "Interactive view of your learning progress with Completed & Ongoing percentages."
        );
        let _ = writeln!(out, "{}", self.grey(&selection_line(selection)));
        out.push('\n');

        match report {
            Report::Overview(panel) => self.overview(&mut out, panel),
            Report::TopicWise(panel) => self.topic_wise(&mut out, panel),
            Report::DetailedTable(panel) => self.detailed_table(&mut out, panel),
        }

        out
    }

    // ---------------------------
    // Overview
    // ---------------------------
    fn overview(&self, out: &mut String, panel: &Panel<OverviewData>) {
        let _ = writeln!(out, "{}\n", self.bold("📈 Overall Overview"));

        let Panel::Ready(data) = panel else {
            let _ = writeln!(out, "{}", self.grey(NO_DATA));
            return;
        };

        let metrics = data.metrics();
        let label_w = metrics.iter().map(|m| visible_width(m.label)).max().unwrap_or(0);
        for m in &metrics {
            let delta = m
                .delta
                .as_ref()
                .map(|d| format!("  ↑ {d}"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{}  {}{}",
                pad_right(m.label, label_w),
                pad_left(&m.value.to_string(), 4),
                delta
            );
        }

        // Minutes per topic
        let _ = writeln!(out, "\n{}", self.bold("⏱  Time per Topic (minutes)"));
        let max = data.time_by_topic.iter().map(|t| t.minutes).max().unwrap_or(0) as f64;
        let name_w = data
            .time_by_topic
            .iter()
            .map(|t| visible_width(&t.topic))
            .max()
            .unwrap_or(0);
        for t in &data.time_by_topic {
            let b = bar(t.minutes as f64, max, self.cfg.bar_width);
            let _ = writeln!(
                out,
                "  {}  {}  {}",
                pad_right(&t.topic, name_w),
                self.paint(&b, &self.cfg.accent_completed),
                t.minutes
            );
        }

        // Completed vs ongoing
        let _ = writeln!(out, "\n{}", self.bold("🍩 Completed vs Ongoing"));
        let total = data.total_subtopics as f64;
        for slice in &data.status_split {
            let accent = if slice.status.is_completed() {
                &self.cfg.accent_completed
            } else {
                &self.cfg.accent_ongoing
            };
            let share = slice.count as f64 / total * 100.0;
            let b = bar(slice.count as f64, total, self.cfg.bar_width);
            let _ = writeln!(
                out,
                "  {}  {}  {} ({:.0}%)",
                pad_right(slice.status.as_str(), 9),
                self.paint(&b, accent),
                slice.count,
                share
            );
        }

        // Percent completed per selected topic
        let _ = writeln!(out, "\n{}", "-".repeat(self.cfg.bar_width + 20));
        let _ = writeln!(out, "{}", self.bold("✅ Percent Completed per Topic"));
        let name_w = data
            .pct_completed_per_topic
            .iter()
            .map(|t| visible_width(&t.topic))
            .max()
            .unwrap_or(0);
        for t in &data.pct_completed_per_topic {
            let b = bar(t.pct_completed, 100.0, self.cfg.bar_width);
            let _ = writeln!(
                out,
                "  {}  {}  {}",
                pad_right(&t.topic, name_w),
                self.paint(&b, &self.cfg.accent_progress),
                t.label()
            );
        }
        if !data.skipped_topics.is_empty() {
            let _ = writeln!(
                out,
                "  {}",
                self.grey(&format!("(no statistics for: {})", data.skipped_topics.join(", ")))
            );
        }
    }

    // ---------------------------
    // Topic-wise progress
    // ---------------------------
    fn topic_wise(&self, out: &mut String, panel: &Panel<Vec<TopicProgressLine>>) {
        let _ = writeln!(out, "{}\n", self.bold("📋 Topic-wise Progress Bars"));

        let Panel::Ready(lines) = panel else {
            let _ = writeln!(out, "{}", self.grey(NO_DATA));
            return;
        };

        for line in lines {
            let _ = writeln!(out, "{}: {}", self.bold(&line.topic), line.summary);
            let b = bar(line.percent as f64, 100.0, self.cfg.bar_width);
            let pct = format!("{:>3}%", line.percent);
            let _ = writeln!(
                out,
                "  {}  {}",
                self.paint(&b, &self.cfg.accent_progress),
                self.percent_colour(&pct, line.stats.pct_completed)
            );
        }
    }

    // ---------------------------
    // Detailed table
    // ---------------------------
    fn detailed_table(&self, out: &mut String, panel: &Panel<DetailedTable>) {
        let _ = writeln!(out, "{}\n", self.bold("📄 Detailed Table View"));

        let Panel::Ready(table) = panel else {
            let _ = writeln!(out, "{}", self.grey(NO_DATA));
            return;
        };

        let mut t = Table::new(vec![
            Column::new("SNo", 5),
            Column::new("Topic", 24),
            Column::new("SubTopic", 26),
            Column::new("SubCategory", 24),
            Column::new("TotalTime_mins", 14),
            Column::new("CompletionStatus", 16),
        ]);
        for rec in &table.records {
            t.add_row(vec![
                rec.sequence_str(),
                rec.topic.clone(),
                rec.subtopic.clone(),
                rec.subcategory.clone(),
                rec.duration_str(),
                rec.status.to_string(),
            ]);
        }

        let style = colors::fg_on_bg(table.style.foreground, table.style.background);
        let rendered = if self.color {
            t.render_with(|line| style.paint(line).to_string())
        } else {
            t.render()
        };
        out.push_str(&rendered);
    }

    // ---------------------------
    // Colour helpers
    // ---------------------------
    fn paint(&self, s: &str, hex: &str) -> String {
        if self.color {
            colors::fg(hex).paint(s).to_string()
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.color { bold(s) } else { s.to_string() }
    }

    fn grey(&self, s: &str) -> String {
        if self.color {
            format!("{GREY}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    fn percent_colour(&self, s: &str, pct: f64) -> String {
        if self.color {
            format!("{}{s}{RESET}", colors::color_for_percent(pct))
        } else {
            s.to_string()
        }
    }
}

/// "View: Overview | Topics: Pivot Table | Status: Completed, Ongoing"
pub fn selection_line(selection: &Selection) -> String {
    let topics = if selection.topics.is_empty() {
        "(none)".to_string()
    } else {
        selection.topics.join(", ")
    };
    let statuses = if selection.statuses.is_empty() {
        "(none)".to_string()
    } else {
        selection
            .statuses
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "View: {} | Topics: {} | Status: {}",
        selection.view, topics, statuses
    )
}
