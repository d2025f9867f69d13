// Generated by wwise-ids-gen from the Wwise authoring export. Do not edit.

//! Identifiers exported by the Wwise authoring project.
//!
//! Values are FNV-1 hashes of the lowercased authoring names, transcribed
//! verbatim from `Wwise_IDs.h`.

pub mod events {
    use crate::types::AkUniqueID;

    pub const FOOTSTEP: AkUniqueID = 1866025847;
    pub const PLAY_AMBIENT: AkUniqueID = 1562304622;
    pub const PLAY_ENGINE: AkUniqueID = 639345804;
    pub const PLAY_TIMETRAVEL: AkUniqueID = 2398522065;
}

pub mod states {
    pub mod music_state {
        use crate::types::AkUniqueID;

        pub const GROUP: AkUniqueID = 3826569560;

        pub mod state {
            use crate::types::AkUniqueID;

            pub const L1: AkUniqueID = 1702304824;
            pub const NONE: AkUniqueID = 748895195;
            pub const ORIGEN: AkUniqueID = 2857991423;
        }
    }

    pub mod playerstate {
        use crate::types::AkUniqueID;

        pub const GROUP: AkUniqueID = 3285234865;

        pub mod state {
            use crate::types::AkUniqueID;

            pub const NONE: AkUniqueID = 748895195;
            pub const RUN: AkUniqueID = 712161704;
            pub const WALK: AkUniqueID = 2108779966;
        }
    }

    pub mod room {
        use crate::types::AkUniqueID;

        pub const GROUP: AkUniqueID = 2077253480;

        pub mod state {
            use crate::types::AkUniqueID;

            pub const CORRIDOR: AkUniqueID = 4063189299;
            pub const NONE: AkUniqueID = 748895195;
            pub const WAITROOM: AkUniqueID = 2462589023;
        }
    }
}

pub mod switches {
    pub mod groundmaterial {
        use crate::types::AkUniqueID;

        pub const GROUP: AkUniqueID = 3072116243;

        pub mod switch {
            use crate::types::AkUniqueID;

            pub const METAL: AkUniqueID = 2473969246;
            pub const NONEMATERIAL: AkUniqueID = 2213076644;
            pub const STAIRS: AkUniqueID = 1289942167;
        }
    }

    pub mod playerspeed {
        use crate::types::AkUniqueID;

        pub const GROUP: AkUniqueID = 1493153371;

        pub mod switch {
            use crate::types::AkUniqueID;

            pub const RUN: AkUniqueID = 712161704;
            pub const WALK: AkUniqueID = 2108779966;
        }
    }
}

pub mod game_parameters {
    use crate::types::AkUniqueID;

    pub const ENGINEINTENCITY: AkUniqueID = 1181339778;
    pub const FANDISTANCE: AkUniqueID = 1223843609;
    pub const PLAYBACK_RATE: AkUniqueID = 1524500807;
    pub const RPM: AkUniqueID = 796049864;
    pub const RTPC_PLAYERSPEED: AkUniqueID = 2653406601;
    pub const SS_AIR_FEAR: AkUniqueID = 1351367891;
    pub const SS_AIR_FREEFALL: AkUniqueID = 3002758120;
    pub const SS_AIR_FURY: AkUniqueID = 1029930033;
    pub const SS_AIR_MONTH: AkUniqueID = 2648548617;
    pub const SS_AIR_PRESENCE: AkUniqueID = 3847924954;
    pub const SS_AIR_RPM: AkUniqueID = 822163944;
    pub const SS_AIR_SIZE: AkUniqueID = 3074696722;
    pub const SS_AIR_STORM: AkUniqueID = 3715662592;
    pub const SS_AIR_TIMEOFDAY: AkUniqueID = 3203397129;
    pub const SS_AIR_TURBULENCE: AkUniqueID = 4160247818;
}

pub mod banks {
    use crate::types::AkUniqueID;

    pub const INIT: AkUniqueID = 1355168291;
    pub const MAIN: AkUniqueID = 3161908922;
    pub const MAIN_SOUNDBANK: AkUniqueID = 2228651116;
}

pub mod busses {
    use crate::types::AkUniqueID;

    pub const CORRIDOREFFECT: AkUniqueID = 1655751232;
    pub const MASTER_AUDIO_BUS: AkUniqueID = 3803692087;
    pub const MOTION_FACTORY_BUS: AkUniqueID = 985987111;
}

pub mod aux_busses {
    use crate::types::AkUniqueID;

    pub const REVERB: AkUniqueID = 348963605;
}

pub mod audio_devices {
    use crate::types::AkUniqueID;

    pub const DEFAULT_MOTION_DEVICE: AkUniqueID = 4230635974;
    pub const NO_OUTPUT: AkUniqueID = 2317455096;
    pub const SYSTEM: AkUniqueID = 3859886410;
}
