//! Canonical 5.1 channel table.
//!
//! FFmpeg's `channelsplit` filter names its output pads after the channel
//! labels of the declared layout. The table below fixes both the pad labels
//! and the human-readable names used in output file names. It is immutable
//! configuration, not user data.

/// One channel of the 5.1 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelDescriptor {
    /// Human-readable name (e.g., "Front Left").
    pub name: &'static str,
    /// Label of the channelsplit output pad (e.g., "FL").
    pub label: &'static str,
}

impl ChannelDescriptor {
    /// Name with spaces replaced by underscores, for output file names.
    pub fn file_name_part(&self) -> String {
        self.name.replace(' ', "_")
    }
}

/// Channel layout declared to the channelsplit filter.
pub const CHANNEL_LAYOUT: &str = "5.1";

/// The six channels of the 5.1 layout, in canonical order.
pub const CHANNELS_5_1: [ChannelDescriptor; 6] = [
    ChannelDescriptor { name: "Front Left", label: "FL" },
    ChannelDescriptor { name: "Front Right", label: "FR" },
    ChannelDescriptor { name: "Center", label: "C" },
    ChannelDescriptor { name: "LFE", label: "LFE" },
    ChannelDescriptor { name: "Surround Left", label: "SL" },
    ChannelDescriptor { name: "Surround Right", label: "SR" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_six_channels_in_canonical_order() {
        let labels: Vec<&str> = CHANNELS_5_1.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["FL", "FR", "C", "LFE", "SL", "SR"]);
    }

    #[test]
    fn file_name_parts_replace_spaces() {
        let parts: Vec<String> = CHANNELS_5_1.iter().map(|c| c.file_name_part()).collect();
        assert_eq!(
            parts,
            [
                "Front_Left",
                "Front_Right",
                "Center",
                "LFE",
                "Surround_Left",
                "Surround_Right"
            ]
        );
    }
}
