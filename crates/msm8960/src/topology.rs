//! MSM8960 card topology
//!
//! Four front-ends (two multimedia streams, circuit-switched voice and
//! VoIP) share one DSP link description and are routed by the LPASS DSP
//! onto the primary I2S back-ends, which reach the Tabla codec.
//!
//! ```text
//! MultiMedia1 ─┐
//! MultiMedia2 ─┤                ┌─▶ PRI_I2S_RX ─▶ tabla_rx1 ─▶ LINEOUT ─▶ Ext Spk
//! CS-Voice    ─┼─(msm-pcm-routing)
//! VoIP        ─┘                └─◀ PRI_I2S_TX ◀─ tabla_tx1
//! ```

use platform::control::EnumControl;
use platform::dai::{DaiLink, DspLink, DspTrigger, SoundCard};
use platform::dapm::{Route, Widget};

use crate::config::{CARD_NAME, CODEC_NAME, EXT_SPK, LINEOUT, SPEAKER_FUNCTION};
use crate::speaker::SpeakerFunction;

/// LPASS back-end DAI names.
pub mod lpass {
    /// Primary I2S playback back-end
    pub const BE_PRI_I2S_RX: &str = "(Backend) PRI_I2S_RX";
    /// Primary I2S capture back-end
    pub const BE_PRI_I2S_TX: &str = "(Backend) PRI_I2S_TX";
    /// HDMI playback back-end
    pub const BE_HDMI: &str = "(Backend) HDMI";
}

/// Front-end ids in the DSP routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FrontendDai {
    /// MultiMedia1
    MultiMedia1 = 0,
    /// MultiMedia2
    MultiMedia2 = 1,
    /// Circuit-switched voice
    CsVoice = 2,
    /// VoIP
    Voip = 3,
}

/// Back-end ids in the DSP routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum BackendDai {
    /// Primary I2S playback
    PriI2sRx = 0,
    /// Primary I2S capture
    PriI2sTx = 1,
    /// HDMI playback (routable, no link on this card)
    HdmiRx = 4,
}

/// Init hooks run when a link's runtime is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkInit {
    /// Register the external speaker widget, its route and the
    /// "Speaker Function" control on the codec.
    SpeakerPath,
}

/// Board-level DAPM widgets.
pub static WIDGETS: [Widget; 1] = [Widget::speaker(EXT_SPK)];

/// Board-level DAPM routes.
pub static ROUTES: [Route; 1] = [Route {
    sink: EXT_SPK,
    control: None,
    source: LINEOUT,
}];

/// "Speaker Function" control descriptor.
pub const SPEAKER_FUNCTION_CONTROL: EnumControl = EnumControl {
    name: SPEAKER_FUNCTION,
    items: SpeakerFunction::ITEMS,
};

/// Mixer controls registered on the codec.
pub static CONTROLS: [EnumControl; 1] = [SPEAKER_FUNCTION_CONTROL];

/// Back-ends any multimedia front-end may be routed to.
pub static MM_BE: [&str; 3] = [lpass::BE_PRI_I2S_RX, lpass::BE_PRI_I2S_TX, lpass::BE_HDMI];

/// DSP link shared by every front-end.
pub static FE_MEDIA: DspLink = DspLink {
    supported_be: &MM_BE,
    fe_playback_channels: 2,
    fe_capture_channels: 1,
    trigger: [DspTrigger::Post, DspTrigger::Post],
};

const fn frontend(
    name: &'static str,
    stream_name: &'static str,
    cpu_dai_name: &'static str,
    platform_name: &'static str,
    dsp_link: &'static DspLink,
    id: FrontendDai,
) -> DaiLink<LinkInit> {
    DaiLink {
        name,
        stream_name,
        cpu_dai_name,
        platform_name,
        codec_name: None,
        codec_dai_name: None,
        dynamic: true,
        no_pcm: false,
        dsp_link: Some(dsp_link),
        be_id: id as u16,
        init: None,
    }
}

const fn backend(
    name: &'static str,
    stream_name: &'static str,
    cpu_dai_name: &'static str,
    codec_dai_name: &'static str,
    id: BackendDai,
    init: Option<LinkInit>,
) -> DaiLink<LinkInit> {
    DaiLink {
        name,
        stream_name,
        cpu_dai_name,
        platform_name: "msm-pcm-routing",
        codec_name: Some(CODEC_NAME),
        codec_dai_name: Some(codec_dai_name),
        dynamic: false,
        no_pcm: true,
        dsp_link: None,
        be_id: id as u16,
        init,
    }
}

/// DAI links: front-ends first, then back-ends.
pub static DAI_LINKS: [DaiLink<LinkInit>; 6] = [
    frontend(
        "MSM8960 Media1",
        "MultiMedia1",
        "MultiMedia1",
        "msm-pcm-dsp",
        &FE_MEDIA,
        FrontendDai::MultiMedia1,
    ),
    frontend(
        "MSM8960 Media2",
        "MultiMedia2",
        "MultiMedia2",
        "msm-pcm-dsp",
        &FE_MEDIA,
        FrontendDai::MultiMedia2,
    ),
    frontend(
        "Circuit-Switch Voice",
        "CS-Voice",
        "CS-VOICE",
        "msm-pcm-voice",
        &FE_MEDIA,
        FrontendDai::CsVoice,
    ),
    frontend(
        "MSM VoIP",
        "VoIP",
        "VoIP",
        "msm-voip-dsp",
        &FE_MEDIA,
        FrontendDai::Voip,
    ),
    backend(
        lpass::BE_PRI_I2S_RX,
        "Primary I2S Playback",
        "msm-dai-q6.0",
        "tabla_rx1",
        BackendDai::PriI2sRx,
        Some(LinkInit::SpeakerPath),
    ),
    backend(
        lpass::BE_PRI_I2S_TX,
        "Primary I2S Capture",
        "msm-dai-q6.1",
        "tabla_tx1",
        BackendDai::PriI2sTx,
        None,
    ),
];

/// The MSM8960 sound card.
pub static CARD: SoundCard<LinkInit> = SoundCard {
    name: CARD_NAME,
    dai_links: &DAI_LINKS,
};
