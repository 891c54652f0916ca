use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    checkins_evaluated: AtomicU64,
    anomalies_flagged: AtomicU64,
    qr_decodes: AtomicU64,
    qr_decode_failures: AtomicU64,
    tokens_issued: AtomicU64,
}

impl Metrics {
    pub fn record_evaluation(&self, anomalous: bool) {
        self.checkins_evaluated.fetch_add(1, Ordering::Relaxed);
        if anomalous {
            self.anomalies_flagged.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_qr_decode(&self, succeeded: bool) {
        self.qr_decodes.fetch_add(1, Ordering::Relaxed);
        if !succeeded {
            self.qr_decode_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_token_issued(&self) {
        self.tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let evaluated = self.checkins_evaluated.load(Ordering::Relaxed);
        let flagged = self.anomalies_flagged.load(Ordering::Relaxed);
        let decodes = self.qr_decodes.load(Ordering::Relaxed);
        let decode_failures = self.qr_decode_failures.load(Ordering::Relaxed);
        let issued = self.tokens_issued.load(Ordering::Relaxed);

        format!(
            "# TYPE waypost_checkins_evaluated_total counter\n\
waypost_checkins_evaluated_total {}\n\
# TYPE waypost_anomalies_flagged_total counter\n\
waypost_anomalies_flagged_total {}\n\
# TYPE waypost_qr_decodes_total counter\n\
waypost_qr_decodes_total {}\n\
# TYPE waypost_qr_decode_failures_total counter\n\
waypost_qr_decode_failures_total {}\n\
# TYPE waypost_tokens_issued_total counter\n\
waypost_tokens_issued_total {}\n",
            evaluated, flagged, decodes, decode_failures, issued
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_exposition() {
        let metrics = Metrics::default();
        metrics.record_evaluation(true);
        metrics.record_evaluation(false);
        metrics.record_qr_decode(false);
        metrics.record_token_issued();

        let rendered = metrics.render_prometheus();
        assert!(rendered.contains("waypost_checkins_evaluated_total 2"));
        assert!(rendered.contains("waypost_anomalies_flagged_total 1"));
        assert!(rendered.contains("waypost_qr_decodes_total 1"));
        assert!(rendered.contains("waypost_qr_decode_failures_total 1"));
        assert!(rendered.contains("waypost_tokens_issued_total 1"));
    }
}
