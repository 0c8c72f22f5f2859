//! HTML dashboard: a self-contained dark-themed page for one rendered view.
//!
//! Everything is inline (CSS and SVG charts), so the file can be opened
//! straight from disk. The sidebar mirrors the selection that produced
//! the page.

use crate::config::{Config, Layout};
use crate::core::filter::Selection;
use crate::core::view::{DetailedTable, OverviewData, Panel, Report, TopicProgressLine, ViewMode};
use crate::models::Status;
use std::f64::consts::PI;
use std::fmt::Write;

const NO_DATA: &str = "No data for the current selection. Adjust the topic or status filters.";

/// Escape text for HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct HtmlDashboard<'a> {
    cfg: &'a Config,
    /// Every topic of the dataset, for the sidebar topic list.
    all_topics: &'a [String],
    generated_at: String,
}

impl<'a> HtmlDashboard<'a> {
    pub fn new(cfg: &'a Config, all_topics: &'a [String], generated_at: String) -> Self {
        Self {
            cfg,
            all_topics,
            generated_at,
        }
    }

    /// Generate the full page.
    pub fn render(&self, report: &Report, selection: &Selection) -> String {
        let mut html = String::with_capacity(16_384);
        self.head(&mut html);

        html.push_str("<body>\n<div class=\"shell\">\n");
        self.sidebar(&mut html, selection);

        html.push_str("<main>\n");
        let _ = writeln!(html, "<h1>📊 {}</h1>", escape(&self.cfg.page_title));
        html.push_str(
            "<p class=\"lead\">Interactive view of your learning progress with Completed &amp; Ongoing percentages.</p>\n",
        );

        match report {
            Report::Overview(panel) => self.overview(&mut html, panel),
            Report::TopicWise(panel) => self.topic_wise(&mut html, panel),
            Report::DetailedTable(panel) => self.detailed_table(&mut html, panel),
        }

        let _ = writeln!(
            html,
            "<footer>Generated {}</footer>",
            escape(&self.generated_at)
        );
        html.push_str("</main>\n</div>\n</body>\n</html>\n");
        html
    }

    // ─── Page chrome ────────────────────────────────────────────────────

    fn head(&self, html: &mut String) {
        let max_width = match self.cfg.layout {
            Layout::Wide => "none",
            Layout::Centered => "960px",
        };
        let _ = write!(
            html,
            r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
:root{{--fg:{fg};--bg:{bg};--panel:#2c2c2c;--border:#3a3a3a;--muted:#a0a0a0;--completed:{completed};--ongoing:{ongoing};--progress:{progress}}}
*{{box-sizing:border-box}}
body{{margin:0;background:var(--bg);color:var(--fg);font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif}}
h1,h2,h3{{font-weight:bold;color:var(--fg)}}
.shell{{display:grid;grid-template-columns:260px 1fr;min-height:100vh}}
@media(max-width:800px){{.shell{{grid-template-columns:1fr}}}}
aside{{background:var(--panel);padding:1.25rem;font-weight:bold}}
aside h2{{font-size:1.1rem;margin-top:0}}
aside h3{{font-size:.8rem;text-transform:uppercase;color:var(--muted);margin:1.25rem 0 .5rem}}
aside ul{{list-style:none;margin:0;padding:0}}
aside li{{padding:.2rem 0;font-weight:normal}}
aside li.on::before{{content:"● ";color:var(--progress)}}
aside li.off{{color:var(--muted)}}
aside li.off::before{{content:"○ "}}
main{{padding:1.5rem 2rem;max-width:{max_width};width:100%;margin:0 auto}}
.lead{{color:var(--muted)}}
.columns{{display:grid;grid-template-columns:minmax(220px,1fr) 2fr;gap:2rem;align-items:start}}
.metric{{margin-bottom:1.25rem}}
.metric label{{display:block;font-weight:bold;font-size:.9rem}}
.metric .value{{font-size:2rem}}
.metric .delta{{color:var(--completed);font-size:.9rem}}
.chart{{width:100%;max-width:640px;display:block;margin-bottom:1.5rem}}
.no-data{{border:1px dashed var(--border);padding:2rem;text-align:center;color:var(--muted)}}
.progress{{height:10px;background:var(--panel);border-radius:5px;margin:.25rem 0 1rem}}
.progress span{{display:block;height:100%;background:var(--progress);border-radius:5px}}
table{{border-collapse:collapse;width:100%}}
th,td{{border:1px solid var(--border);padding:.4rem .6rem;text-align:left}}
th{{background:var(--panel)}}
hr{{border:none;border-top:1px solid var(--border);margin:2rem 0}}
footer{{margin-top:2rem;color:var(--muted);font-size:.8rem}}
</style>
</head>
"##,
            title = escape(&self.cfg.page_title),
            fg = escape(&self.cfg.foreground),
            bg = escape(&self.cfg.background),
            completed = escape(&self.cfg.accent_completed),
            ongoing = escape(&self.cfg.accent_ongoing),
            progress = escape(&self.cfg.accent_progress),
            max_width = max_width,
        );
    }

    fn sidebar(&self, html: &mut String, selection: &Selection) {
        html.push_str("<aside>\n<h2>Dashboard Options</h2>\n");

        html.push_str("<h3>Report View</h3>\n<ul>\n");
        for mode in [
            ViewMode::Overview,
            ViewMode::TopicWiseProgress,
            ViewMode::DetailedTable,
        ] {
            let class = if mode == selection.view { "on" } else { "off" };
            let _ = writeln!(html, "<li class=\"{class}\">{}</li>", mode.title());
        }
        html.push_str("</ul>\n");

        html.push_str("<h3>Topics</h3>\n<ul>\n");
        for topic in self.all_topics {
            let class = if selection.topics.contains(topic) { "on" } else { "off" };
            let _ = writeln!(html, "<li class=\"{class}\">{}</li>", escape(topic));
        }
        for topic in selection.topics.iter().filter(|t| !self.all_topics.contains(t)) {
            let _ = writeln!(html, "<li class=\"on unknown\">{} (unknown)</li>", escape(topic));
        }
        html.push_str("</ul>\n");

        html.push_str("<h3>Status</h3>\n<ul>\n");
        for status in Status::ALL {
            let class = if selection.statuses.contains(&status) { "on" } else { "off" };
            let _ = writeln!(html, "<li class=\"{class}\">{}</li>", status.as_str());
        }
        html.push_str("</ul>\n</aside>\n");
    }

    fn no_data(html: &mut String) {
        let _ = writeln!(html, "<div class=\"no-data\">{NO_DATA}</div>");
    }

    // ─── Overview ───────────────────────────────────────────────────────

    fn overview(&self, html: &mut String, panel: &Panel<OverviewData>) {
        html.push_str("<h2>📈 Overall Overview</h2>\n");

        let Panel::Ready(data) = panel else {
            Self::no_data(html);
            return;
        };

        html.push_str("<div class=\"columns\">\n<section>\n");
        for m in data.metrics() {
            let delta = m
                .delta
                .map(|d| format!("<span class=\"delta\">↑ {}</span>", escape(&d)))
                .unwrap_or_default();
            let _ = writeln!(
                html,
                "<div class=\"metric\"><label>{}</label><span class=\"value\">{}</span> {}</div>",
                m.label, m.value, delta
            );
        }
        html.push_str("</section>\n<section>\n");
        html.push_str(&self.time_chart(data));
        html.push_str(&self.donut_chart(data));
        html.push_str("</section>\n</div>\n<hr>\n");

        html.push_str("<h2>✅ Percent Completed per Topic</h2>\n");
        html.push_str(&self.percent_chart(data));
        if !data.skipped_topics.is_empty() {
            let skipped: Vec<String> = data.skipped_topics.iter().map(|t| escape(t)).collect();
            let _ = writeln!(
                html,
                "<p class=\"lead\">No statistics for: {}</p>",
                skipped.join(", ")
            );
        }
    }

    /// Vertical bars: minutes per topic.
    fn time_chart(&self, data: &OverviewData) -> String {
        let (w, h) = (600.0, 340.0);
        let (left, right, top, bottom) = (50.0, 10.0, 20.0, 120.0);
        let plot_w = w - left - right;
        let plot_h = h - top - bottom;

        let max = data
            .time_by_topic
            .iter()
            .map(|t| t.minutes)
            .max()
            .unwrap_or(0)
            .max(1) as f64;
        let n = data.time_by_topic.len().max(1) as f64;
        let slot = plot_w / n;
        let bar_w = slot * 0.7;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg class=\"chart\" viewBox=\"0 0 {w:.0} {h:.0}\" role=\"img\" aria-label=\"Minutes per topic\">"
        );
        let _ = writeln!(
            svg,
            "  <line x1=\"{left}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"var(--border)\"/>",
            y = top + plot_h,
            x2 = w - right
        );
        let _ = writeln!(
            svg,
            "  <text x=\"12\" y=\"{y:.0}\" fill=\"var(--fg)\" font-size=\"12\" transform=\"rotate(-90 12 {y:.0})\" text-anchor=\"middle\">Minutes</text>",
            y = top + plot_h / 2.0
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{x:.0}\" y=\"{y:.0}\" fill=\"var(--muted)\" font-size=\"10\" text-anchor=\"end\">{max:.0}</text>",
            x = left - 6.0,
            y = top + 4.0
        );

        for (i, t) in data.time_by_topic.iter().enumerate() {
            let bh = t.minutes as f64 / max * plot_h;
            let x = left + slot * i as f64 + (slot - bar_w) / 2.0;
            let y = top + plot_h - bh;
            let cx = x + bar_w / 2.0;
            let label_y = top + plot_h + 14.0;
            let _ = writeln!(
                svg,
                "  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_w:.1}\" height=\"{bh:.1}\" fill=\"var(--completed)\"><title>{}: {} min</title></rect>",
                escape(&t.topic),
                t.minutes
            );
            let _ = writeln!(
                svg,
                "  <text x=\"{cx:.1}\" y=\"{label_y:.1}\" fill=\"var(--fg)\" font-size=\"11\" text-anchor=\"end\" transform=\"rotate(-45 {cx:.1} {label_y:.1})\">{}</text>",
                escape(&t.topic)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Two-slice donut: completed vs ongoing.
    fn donut_chart(&self, data: &OverviewData) -> String {
        let r = 80.0;
        let circumference = 2.0 * PI * r;
        let total = data.total_subtopics.max(1) as f64;

        let mut svg = String::new();
        svg.push_str(
            "<svg class=\"chart\" viewBox=\"0 0 320 220\" role=\"img\" aria-label=\"Completed vs ongoing\">\n",
        );
        svg.push_str("  <g transform=\"rotate(-90 110 110)\">\n");

        let mut offset = 0.0;
        for slice in &data.status_split {
            let color = if slice.status.is_completed() {
                "var(--completed)"
            } else {
                "var(--ongoing)"
            };
            let len = slice.count as f64 / total * circumference;
            let _ = writeln!(
                svg,
                "    <circle cx=\"110\" cy=\"110\" r=\"{r}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"36\" stroke-dasharray=\"{len:.2} {circumference:.2}\" stroke-dashoffset=\"{:.2}\"/>",
                -offset
            );
            offset += len;
        }
        svg.push_str("  </g>\n");

        for (i, slice) in data.status_split.iter().enumerate() {
            let color = if slice.status.is_completed() {
                "var(--completed)"
            } else {
                "var(--ongoing)"
            };
            let y = 95 + i * 30;
            let share = slice.count as f64 / total * 100.0;
            let _ = writeln!(
                svg,
                "  <rect x=\"215\" y=\"{}\" width=\"12\" height=\"12\" fill=\"{color}\"/><text x=\"233\" y=\"{y}\" fill=\"var(--fg)\" font-size=\"12\">{} {:.0}%</text>",
                y - 10,
                slice.status.as_str(),
                share
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Horizontal bars on a 0..100 scale with integer percent labels.
    fn percent_chart(&self, data: &OverviewData) -> String {
        let row_h = 28.0;
        let left = 180.0;
        let plot_w = 380.0;
        let h = row_h * data.pct_completed_per_topic.len().max(1) as f64 + 20.0;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg class=\"chart\" viewBox=\"0 0 620 {h:.0}\" role=\"img\" aria-label=\"Percent completed per topic\">"
        );

        for (i, t) in data.pct_completed_per_topic.iter().enumerate() {
            let y = i as f64 * row_h + 4.0;
            let bw = t.pct_completed.clamp(0.0, 100.0) / 100.0 * plot_w;
            let _ = writeln!(
                svg,
                "  <text x=\"{:.0}\" y=\"{:.1}\" fill=\"var(--fg)\" font-size=\"12\" text-anchor=\"end\">{}</text>",
                left - 8.0,
                y + 15.0,
                escape(&t.topic)
            );
            let _ = writeln!(
                svg,
                "  <rect x=\"{left}\" y=\"{y:.1}\" width=\"{bw:.1}\" height=\"20\" fill=\"var(--progress)\"/>"
            );
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" fill=\"var(--fg)\" font-size=\"12\" font-weight=\"bold\">{}</text>",
                left + bw + 6.0,
                y + 15.0,
                t.label()
            );
        }

        // 0 and 100 ticks
        let axis_y = row_h * data.pct_completed_per_topic.len() as f64 + 16.0;
        let _ = writeln!(
            svg,
            "  <text x=\"{left}\" y=\"{axis_y:.0}\" fill=\"var(--muted)\" font-size=\"10\">0</text><text x=\"{:.0}\" y=\"{axis_y:.0}\" fill=\"var(--muted)\" font-size=\"10\" text-anchor=\"end\">100</text>",
            left + plot_w
        );

        svg.push_str("</svg>\n");
        svg
    }

    // ─── Topic-wise progress ────────────────────────────────────────────

    fn topic_wise(&self, html: &mut String, panel: &Panel<Vec<TopicProgressLine>>) {
        html.push_str("<h2>📋 Topic-wise Progress Bars</h2>\n");

        let Panel::Ready(lines) = panel else {
            Self::no_data(html);
            return;
        };

        for line in lines {
            let _ = writeln!(
                html,
                "<p><strong>{}</strong>: {}</p>\n<div class=\"progress\" role=\"progressbar\" aria-valuemin=\"0\" aria-valuemax=\"100\" aria-valuenow=\"{pct}\"><span style=\"width:{pct}%\"></span></div>",
                escape(&line.topic),
                escape(&line.summary),
                pct = line.percent
            );
        }
    }

    // ─── Detailed table ─────────────────────────────────────────────────

    fn detailed_table(&self, html: &mut String, panel: &Panel<DetailedTable>) {
        html.push_str("<h2>📄 Detailed Table View</h2>\n");

        let Panel::Ready(table) = panel else {
            Self::no_data(html);
            return;
        };

        let cell_style = format!(
            "color:{};background-color:{}",
            table.style.foreground, table.style.background
        );

        html.push_str("<table>\n<thead><tr>");
        for h in [
            "SNo",
            "Topic",
            "SubTopic",
            "SubCategory",
            "TotalTime_mins",
            "CompletionStatus",
        ] {
            let _ = write!(html, "<th>{h}</th>");
        }
        html.push_str("</tr></thead>\n<tbody>\n");

        for rec in &table.records {
            html.push_str("<tr>");
            for value in [
                rec.sequence_str(),
                rec.topic.clone(),
                rec.subtopic.clone(),
                rec.subcategory.clone(),
                rec.duration_str(),
                rec.status.to_string(),
            ] {
                let _ = write!(html, "<td style=\"{cell_style}\">{}</td>", escape(&value));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic::Core;
    use crate::dataset::{load, topics};

    fn page(sel: &Selection) -> String {
        let cfg = Config::default();
        let records = load();
        let all = topics(&records);
        let report = Core::render(&records, sel);
        HtmlDashboard::new(&cfg, &all, "2026-01-01 10:00".into()).render(&report, sel)
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("Sort & <b>\"x\"</b>"), "Sort &amp; &lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn overview_page_has_charts_and_sidebar() {
        let records = load();
        let html = page(&Selection::all(&records, ViewMode::Overview));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Excel Progress Dashboard</title>"));
        assert!(html.contains("Dashboard Options"));
        assert!(html.contains("<li class=\"on\">Overview</li>"));
        assert!(html.contains("Excel Sort &amp; Filter"));
        assert!(html.contains("↑ 70.0%"));
        assert_eq!(html.matches("<svg").count(), 3);
        assert!(html.contains(">100%</text>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn no_data_placeholder() {
        let records = load();
        let sel = Selection::all(&records, ViewMode::Overview).with_topics(Vec::<String>::new());
        let html = page(&sel);
        assert!(html.contains("class=\"no-data\""));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn topic_wise_progress_bars() {
        let records = load();
        let html = page(&Selection::all(&records, ViewMode::TopicWiseProgress));
        assert_eq!(html.matches("role=\"progressbar\"").count(), 8);
        assert!(html.contains("style=\"width:50%\""));
    }

    #[test]
    fn table_uses_style_hints() {
        let records = load();
        let sel = Selection::all(&records, ViewMode::DetailedTable).with_statuses([Status::Ongoing]);
        let html = page(&sel);
        assert_eq!(html.matches("<tr><td").count(), 3);
        assert!(html.contains("color:#ffffff;background-color:#1e1e1e"));
        assert!(html.contains("<li class=\"off\">Completed</li>"));
    }
}
