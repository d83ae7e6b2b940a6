//! SubRip (SRT) and WebVTT subtitle rendering.
//!
//! Both formats share the cue structure and differ only in header, cue
//! numbering and the millisecond separator (`,` vs `.`).

use crate::types::TranscriptSegment;

/// Render numbered SRT cues with `HH:MM:SS,mmm` timings.
pub fn render_srt(segments: &[TranscriptSegment]) -> String {
    let mut out = String::new();

    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", i + 1));
        out.push_str(&format!(
            "{} --> {}\n",
            format_time(seg.start, ','),
            format_time(seg.end, ',')
        ));
        out.push_str(&cue_text(seg));
        out.push('\n');
    }

    out
}

/// Render a WebVTT document with `HH:MM:SS.mmm` timings.
pub fn render_vtt(segments: &[TranscriptSegment]) -> String {
    let mut out = String::from("WEBVTT\n");

    for seg in segments {
        out.push('\n');
        out.push_str(&format!(
            "{} --> {}\n",
            format_time(seg.start, '.'),
            format_time(seg.end, '.')
        ));
        out.push_str(&cue_text(seg));
        out.push('\n');
    }

    out
}

fn cue_text(seg: &TranscriptSegment) -> String {
    match seg.speaker.as_deref() {
        Some(speaker) => format!("{speaker}: {}", seg.text),
        None => seg.text.clone(),
    }
}

/// Format seconds as `HH:MM:SS<sep>mmm`.
fn format_time(seconds: f64, sep: char) -> String {
    let clamped = seconds.max(0.0);
    let millis = (clamped * 1000.0).round() as u64;
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let secs = (millis / 1000) % 60;
    let ms = millis % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02}{sep}{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str, speaker: Option<&str>) -> TranscriptSegment {
        TranscriptSegment::new(start, end, text, speaker.map(str::to_string))
    }

    // ── time formatting ─────────────────────────────────────────────────────

    #[test]
    fn srt_times_use_comma_millis() {
        assert_eq!(format_time(0.0, ','), "00:00:00,000");
        assert_eq!(format_time(1.5, ','), "00:00:01,500");
        assert_eq!(format_time(3661.25, ','), "01:01:01,250");
    }

    #[test]
    fn vtt_times_use_dot_millis() {
        assert_eq!(format_time(62.075, '.'), "00:01:02.075");
    }

    #[test]
    fn sub_millisecond_values_round() {
        assert_eq!(format_time(0.0004, ','), "00:00:00,000");
        assert_eq!(format_time(0.0006, ','), "00:00:00,001");
    }

    // ── cue structure ───────────────────────────────────────────────────────

    #[test]
    fn srt_cues_are_numbered_and_separated() {
        let segments = vec![
            seg(0.0, 1.5, "Hello.", Some("SPEAKER_00")),
            seg(2.0, 3.0, "Hi.", Some("SPEAKER_01")),
        ];
        let srt = render_srt(&segments);
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:01,500\nSPEAKER_00: Hello.\n\
             \n2\n00:00:02,000 --> 00:00:03,000\nSPEAKER_01: Hi.\n"
        );
    }

    #[test]
    fn vtt_document_starts_with_header() {
        let segments = vec![seg(0.0, 1.0, "Hello.", None)];
        let vtt = render_vtt(&segments);
        assert_eq!(vtt, "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nHello.\n");
    }

    #[test]
    fn unattributed_cues_have_no_speaker_prefix() {
        let segments = vec![seg(0.0, 1.0, "ambient", None)];
        let srt = render_srt(&segments);
        assert!(srt.contains("\nambient\n"));
        assert!(!srt.contains(": ambient"));
    }

    #[test]
    fn empty_segments_render_header_only() {
        assert_eq!(render_srt(&[]), "");
        assert_eq!(render_vtt(&[]), "WEBVTT\n");
    }
}
