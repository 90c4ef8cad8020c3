//! Ratio metrics derived from raw counts.

use super::counts::RawCounts;
use super::types::Ratio;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRatios {
    pub automation: Ratio,
    pub data_resource_access: Ratio,
    pub context_switch: Ratio,
}

/// Share of automation operations in percent
pub fn automation_ratio(automation_operations: usize, operations: usize) -> Ratio {
    Ratio::of(automation_operations as f64, operations as f64).scaled(100.0)
}

/// Read-versus-write balance in `[-1, 1]`: `1` only reads, `-1` only writes
pub fn data_resource_access_ratio(reads: usize, writes: usize) -> Ratio {
    Ratio::of(reads as f64 - writes as f64, (reads + writes) as f64)
}

pub fn context_switch_ratio(contexts: usize, context_switches: usize) -> Ratio {
    Ratio::of(contexts as f64, context_switches as f64)
}

pub fn derive(counts: &RawCounts, context_switches: usize) -> DerivedRatios {
    DerivedRatios {
        automation: automation_ratio(counts.automation_operations, counts.operations),
        data_resource_access: data_resource_access_ratio(
            counts.data_resources_read,
            counts.data_resources_written,
        ),
        context_switch: context_switch_ratio(counts.contexts, context_switches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_automation_ratio_is_percentage() {
        let ratio = automation_ratio(2, 3).value().unwrap();
        assert!((ratio - 66.666_666).abs() < 1e-3);
        assert_eq!(automation_ratio(4, 4).value(), Some(100.0));
    }

    #[test]
    fn test_automation_ratio_without_operations_is_undefined() {
        assert!(!automation_ratio(0, 0).is_defined());
    }

    #[test]
    fn test_access_ratio_balance() {
        assert_eq!(data_resource_access_ratio(1, 1).value(), Some(0.0));
        assert_eq!(data_resource_access_ratio(3, 0).value(), Some(1.0));
        assert_eq!(data_resource_access_ratio(0, 2).value(), Some(-1.0));
        assert_eq!(data_resource_access_ratio(3, 1).value(), Some(0.5));
        assert!(!data_resource_access_ratio(0, 0).is_defined());
    }

    #[test]
    fn test_context_switch_ratio() {
        assert_eq!(context_switch_ratio(3, 2).value(), Some(1.5));
        assert!(!context_switch_ratio(3, 0).is_defined());
    }

    #[test]
    fn test_derive_uses_counts() {
        let counts = RawCounts {
            operations: 4,
            automation_operations: 1,
            data_resources_read: 2,
            data_resources_written: 2,
            contexts: 2,
            ..Default::default()
        };

        let ratios = derive(&counts, 4);

        assert_eq!(ratios.automation.value(), Some(25.0));
        assert_eq!(ratios.data_resource_access.value(), Some(0.0));
        assert_eq!(ratios.context_switch.value(), Some(0.5));
    }
}
