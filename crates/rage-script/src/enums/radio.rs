/// In-game radio stations.
///
/// The engine addresses stations by name string; the closed set here maps
/// both ways so a raw station name from the host can be folded back into
/// a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadioStation {
    LosSantosRockRadio,
    NonStopPopFM,
    RadioLosSantos,
    ChannelX,
    WestCoastTalkRadio,
    RebelRadio,
    SoulwaxFM,
    EastLosFM,
    WestCoastClassics,
    BlaineCountyRadio,
    TheBlueArk,
    WorldWideFM,
    FlyloFM,
    TheLowdown,
    RadioMirrorPark,
    Space,
    VinewoodBoulevardRadio,
    SelfRadio,
    TheLab,
    BlondedLosSantos,
    LosSantosUndergroundRadio,
    RadioOff,
}

impl RadioStation {
    /// Every station, in engine order, with the off state last.
    pub const ALL: [RadioStation; 22] = [
        Self::LosSantosRockRadio,
        Self::NonStopPopFM,
        Self::RadioLosSantos,
        Self::ChannelX,
        Self::WestCoastTalkRadio,
        Self::RebelRadio,
        Self::SoulwaxFM,
        Self::EastLosFM,
        Self::WestCoastClassics,
        Self::BlaineCountyRadio,
        Self::TheBlueArk,
        Self::WorldWideFM,
        Self::FlyloFM,
        Self::TheLowdown,
        Self::RadioMirrorPark,
        Self::Space,
        Self::VinewoodBoulevardRadio,
        Self::SelfRadio,
        Self::TheLab,
        Self::BlondedLosSantos,
        Self::LosSantosUndergroundRadio,
        Self::RadioOff,
    ];

    /// The engine-side name of this station.
    pub fn station_name(self) -> &'static str {
        match self {
            Self::LosSantosRockRadio => "RADIO_01_CLASS_ROCK",
            Self::NonStopPopFM => "RADIO_02_POP",
            Self::RadioLosSantos => "RADIO_03_HIPHOP_NEW",
            Self::ChannelX => "RADIO_04_PUNK",
            Self::WestCoastTalkRadio => "RADIO_05_TALK_01",
            Self::RebelRadio => "RADIO_06_COUNTRY",
            Self::SoulwaxFM => "RADIO_07_DANCE_01",
            Self::EastLosFM => "RADIO_08_MEXICAN",
            Self::WestCoastClassics => "RADIO_09_HIPHOP_OLD",
            Self::BlaineCountyRadio => "RADIO_11_TALK_02",
            Self::TheBlueArk => "RADIO_12_REGGAE",
            Self::WorldWideFM => "RADIO_13_JAZZ",
            Self::FlyloFM => "RADIO_14_DANCE_02",
            Self::TheLowdown => "RADIO_15_MOTOWN",
            Self::RadioMirrorPark => "RADIO_16_SILVERLAKE",
            Self::Space => "RADIO_17_FUNK",
            Self::VinewoodBoulevardRadio => "RADIO_18_90S_ROCK",
            Self::SelfRadio => "RADIO_19_USER",
            Self::TheLab => "RADIO_20_THELAB",
            Self::BlondedLosSantos => "RADIO_21_DLC_XM17",
            Self::LosSantosUndergroundRadio => "RADIO_22_DLC_BATTLE_MIX1_RADIO",
            Self::RadioOff => "OFF",
        }
    }

    /// Reverse lookup from an engine station name.
    /// Returns None for names outside the closed set.
    pub fn from_station_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|station| station.station_name() == name)
    }
}
