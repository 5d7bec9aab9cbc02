//! Prometheus text exposition for collected samples.
//!
//! Samples are grouped into one gauge `MetricFamily` per metric name
//! (first-seen order) and rendered with the prometheus `TextEncoder`. The
//! text format must not repeat a series, so when two pending samples share
//! both name and label set, the later one wins.

use std::collections::HashMap;

use prometheus::proto::{Gauge, LabelPair, Metric, MetricFamily, MetricType};
use prometheus::{Encoder, TextEncoder};

use tstick_core::error::{BridgeError, Result};
use tstick_core::sample::MetricSample;

/// Render a collected sample sequence as Prometheus text exposition.
pub fn render(samples: Vec<MetricSample>) -> Result<String> {
    let families = to_families(samples);
    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&families, &mut buf)
        .map_err(|e| BridgeError::Internal(format!("metric encode failed: {e}")))?;
    String::from_utf8(buf).map_err(|e| BridgeError::Internal(format!("non-utf8 exposition: {e}")))
}

/// Content type of the rendered payload.
pub fn content_type() -> &'static str {
    prometheus::TEXT_FORMAT
}

fn to_families(samples: Vec<MetricSample>) -> Vec<MetricFamily> {
    let mut families: Vec<MetricFamily> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for sample in samples {
        let at = match index.get(&sample.name) {
            Some(&at) => at,
            None => {
                let mut fam = MetricFamily::default();
                fam.set_name(sample.name.clone());
                fam.set_help(sample.help.clone());
                fam.set_field_type(MetricType::GAUGE);
                index.insert(sample.name.clone(), families.len());
                families.push(fam);
                families.len() - 1
            }
        };

        let mut gauge = Gauge::default();
        gauge.set_value(sample.value);
        let mut metric = Metric::default();
        metric.set_gauge(gauge);
        for (k, v) in &sample.labels {
            let mut pair = LabelPair::default();
            pair.set_name(k.clone());
            pair.set_value(v.clone());
            metric.mut_label().push(pair);
        }

        let fam = &mut families[at];
        match fam
            .get_metric()
            .iter()
            .position(|m| same_labels(m, &metric))
        {
            // Same series pending twice between scrapes: last write wins.
            Some(pos) => fam.mut_metric()[pos] = metric,
            None => fam.mut_metric().push(metric),
        }
    }

    families
}

fn same_labels(a: &Metric, b: &Metric) -> bool {
    let (la, lb) = (a.get_label(), b.get_label());
    la.len() == lb.len()
        && la
            .iter()
            .zip(lb.iter())
            .all(|(x, y)| x.get_name() == y.get_name() && x.get_value() == y.get_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, value: f64, device: &str) -> MetricSample {
        MetricSample::for_device(name, value, device, "test help")
    }

    #[test]
    fn renders_help_type_and_labeled_series() {
        let out = render(vec![sample("tstick_battery_voltage", 3.7, "TStick_0001abc")]).unwrap();
        assert!(out.contains("# HELP tstick_battery_voltage test help"));
        assert!(out.contains("# TYPE tstick_battery_voltage gauge"));
        assert!(out.contains("tstick_battery_voltage{device_id=\"TStick_0001abc\"} 3.7"));
    }

    #[test]
    fn same_name_different_devices_share_one_family() {
        let out = render(vec![
            sample("tstick_fsr", 1.0, "TStick_193"),
            sample("tstick_fsr", 2.0, "TStick_501"),
        ])
        .unwrap();
        assert_eq!(out.matches("# TYPE tstick_fsr gauge").count(), 1);
        assert!(out.contains("tstick_fsr{device_id=\"TStick_193\"} 1"));
        assert!(out.contains("tstick_fsr{device_id=\"TStick_501\"} 2"));
    }

    #[test]
    fn identical_series_keeps_the_last_value() {
        let out = render(vec![
            sample("tstick_fsr", 1.0, "TStick_193"),
            sample("tstick_fsr", 7.0, "TStick_193"),
        ])
        .unwrap();
        assert!(!out.contains("tstick_fsr{device_id=\"TStick_193\"} 1"));
        assert!(out.contains("tstick_fsr{device_id=\"TStick_193\"} 7"));
    }

    #[test]
    fn content_type_matches_the_encoder() {
        assert_eq!(content_type(), TextEncoder::new().format_type());
    }

    #[test]
    fn unlabeled_sample_renders_bare() {
        let out = render(vec![MetricSample::new("tstick_global_time", 12.5, "bridge liveness timestamp")]).unwrap();
        assert!(out.contains("tstick_global_time 12.5"));
    }
}
