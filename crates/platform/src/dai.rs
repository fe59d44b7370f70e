//! Digital audio interface (DAI) link and card descriptors
//!
//! A card is a static list of DAI links. Front-end links expose a PCM
//! device to user space and are routed dynamically by the DSP to one or
//! more back-end links; back-end links bind a CPU DAI to a codec DAI and
//! have no PCM device of their own.
//!
//! ```text
//! user space PCM ─▶ front-end link ─(DSP routing)─▶ back-end link ─▶ codec
//! ```

use crate::control::ControlRegistry;
use crate::dapm::DapmContext;

/// Trigger ordering between a front-end and its back-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DspTrigger {
    /// Trigger the front-end before the back-ends
    Pre,
    /// Trigger the front-end after the back-ends
    Post,
}

/// Dynamic routing capabilities of a front-end link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DspLink {
    /// Names of back-end links this front-end may be routed to
    pub supported_be: &'static [&'static str],
    /// Playback channel count
    pub fe_playback_channels: u8,
    /// Capture channel count
    pub fe_capture_channels: u8,
    /// Trigger ordering, `[playback, capture]`
    pub trigger: [DspTrigger; 2],
}

impl DspLink {
    /// Returns `true` if `be_name` is a routable back-end.
    #[must_use]
    pub fn supports(&self, be_name: &str) -> bool {
        self.supported_be.contains(&be_name)
    }
}

/// One DAI link of a card.
///
/// `I` identifies the machine-specific init hook run when the link's
/// runtime is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaiLink<I: 'static> {
    /// Link name
    pub name: &'static str,
    /// Stream name
    pub stream_name: &'static str,
    /// CPU-side DAI
    pub cpu_dai_name: &'static str,
    /// PCM platform driver
    pub platform_name: &'static str,
    /// Codec device, for links that reach a codec
    pub codec_name: Option<&'static str>,
    /// Codec DAI, for links that reach a codec
    pub codec_dai_name: Option<&'static str>,
    /// Routed dynamically by the DSP (front-end)
    pub dynamic: bool,
    /// No PCM device is created (back-end)
    pub no_pcm: bool,
    /// Routing capabilities of a front-end
    pub dsp_link: Option<&'static DspLink>,
    /// Front-end or back-end id in the DSP routing table
    pub be_id: u16,
    /// Init hook
    pub init: Option<I>,
}

impl<I: 'static> DaiLink<I> {
    /// `true` for dynamically routed front-end links.
    #[must_use]
    pub const fn is_frontend(&self) -> bool {
        self.dynamic
    }

    /// `true` for back-end links.
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        self.no_pcm
    }
}

/// Card descriptor handed to the host at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundCard<I: 'static> {
    /// Card name
    pub name: &'static str,
    /// DAI links, in registration order
    pub dai_links: &'static [DaiLink<I>],
}

impl<I: 'static> SoundCard<I> {
    /// Number of DAI links.
    #[must_use]
    pub fn num_links(&self) -> usize {
        self.dai_links.len()
    }

    /// Look up a link by name.
    #[must_use]
    pub fn link(&self, name: &str) -> Option<&'static DaiLink<I>> {
        self.dai_links.iter().find(|link| link.name == name)
    }

    /// Front-end links.
    pub fn frontends(&self) -> impl Iterator<Item = &'static DaiLink<I>> {
        self.dai_links.iter().filter(|link| link.is_frontend())
    }

    /// Back-end links.
    pub fn backends(&self) -> impl Iterator<Item = &'static DaiLink<I>> {
        self.dai_links.iter().filter(|link| link.is_backend())
    }
}

/// Runtime of a link that reaches a codec, as passed to init hooks.
pub trait CodecRuntime: DapmContext + ControlRegistry {
    /// Name of the bound codec device.
    fn codec_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    static DSP: DspLink = DspLink {
        supported_be: &["BE-A", "BE-B"],
        fe_playback_channels: 2,
        fe_capture_channels: 1,
        trigger: [DspTrigger::Post, DspTrigger::Post],
    };

    static LINKS: [DaiLink<()>; 2] = [
        DaiLink {
            name: "FE",
            stream_name: "Media",
            cpu_dai_name: "Media",
            platform_name: "pcm-dsp",
            codec_name: None,
            codec_dai_name: None,
            dynamic: true,
            no_pcm: false,
            dsp_link: Some(&DSP),
            be_id: 0,
            init: None,
        },
        DaiLink {
            name: "BE-A",
            stream_name: "Playback",
            cpu_dai_name: "dai.0",
            platform_name: "pcm-routing",
            codec_name: Some("codec"),
            codec_dai_name: Some("rx1"),
            dynamic: false,
            no_pcm: true,
            dsp_link: None,
            be_id: 0,
            init: Some(()),
        },
    ];

    static CARD: SoundCard<()> = SoundCard {
        name: "card",
        dai_links: &LINKS,
    };

    #[test]
    fn dsp_link_supports_listed_backends() {
        assert!(DSP.supports("BE-A"));
        assert!(DSP.supports("BE-B"));
        assert!(!DSP.supports("BE-C"));
    }

    #[test]
    fn card_splits_frontends_and_backends() {
        assert_eq!(CARD.num_links(), 2);
        assert_eq!(CARD.frontends().count(), 1);
        assert_eq!(CARD.backends().count(), 1);
        assert_eq!(CARD.link("BE-A").map(|l| l.stream_name), Some("Playback"));
        assert!(CARD.link("missing").is_none());
    }
}
