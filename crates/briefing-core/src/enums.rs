//! Enumeration types used throughout the board.
//!
//! Every enum that travels through a share link has a fixed wire tag. Tags
//! are part of the link format and never change once published.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a fieldless enum whose variants map one-to-one onto wire tags.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $tag)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire tag used in share links.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Side an object fights for.
    pub enum Coalition {
        Neutral => "",
        Blue => "blue",
        Red => "red",
    }
}

impl Default for Coalition {
    fn default() -> Self {
        Coalition::Neutral
    }
}

wire_enum! {
    /// Sprite swapped in once an object reaches the end of its path.
    pub enum EndType {
        ExplosionMedium => "expl_m",
    }
}

wire_enum! {
    /// Offset strategy for wingmen flying with a lead.
    pub enum Formation {
        /// Wingmen sit on top of the lead.
        None => "",
        EchelonRight => "echelon-right",
        EchelonLeft => "echelon-left",
        FingerFourRight => "finger-four-right",
        FingerFourLeft => "finger-four-left",
        CombatSpread => "combat-spread",
        /// Wingmen fly the lead's track, staggered in time.
        Trail => "trail",
    }
}

impl Default for Formation {
    fn default() -> Self {
        Formation::None
    }
}

impl Formation {
    /// Like [`Formation::from_tag`], also accepting tags retired from the format.
    pub fn from_any_tag(tag: &str) -> Option<Self> {
        match tag {
            "abreast" => Some(Formation::CombatSpread),
            other => Formation::from_tag(other),
        }
    }
}

wire_enum! {
    pub enum Airplane {
        Albatros => "albatros",
        Awacs => "awacs",
        Blackjack => "blackjack",
        Fishbed => "fishbed",
        Flanker => "flanker",
        Gripen => "gripen",
        Harrier => "harrier",
        Hercules => "hercules",
        Hornet => "hornet",
        Lancer => "lancer",
        Stratofortress => "stratofortress",
        Tanker => "tanker",
        Thunder => "thunder",
        Tiger => "tiger",
        Tomcat => "tomcat",
        Viggen => "viggen",
        Viper => "viper",
        Warthog => "warthog",
    }
}

wire_enum! {
    pub enum Helicopter {
        Apache => "apache",
        Hind => "hind",
        Huey => "huey",
    }
}

wire_enum! {
    pub enum Ship {
        Carrier => "carrier",
        Cruiser => "cruiser",
        Frigate => "frigate",
        Gunboat => "gunboat",
        CargoShip => "cargoship",
        TankerShip => "tanker-ship",
    }
}

wire_enum! {
    pub enum GroundUnit {
        Infantry => "infantry",
        Manpad => "manpad",
        Truck => "truck",
        Apc => "apc",
        Tank => "tank",
        MobileSam => "mobilesam",
    }
}

wire_enum! {
    pub enum StaticSite {
        Bullseye => "bullseye",
        Airfield => "airfield",
        SamSite => "samsite",
        Factory => "factory",
        Bridge => "bridge",
        Base => "base",
        Farp => "farp",
        Aaa => "aaa",
    }
}

wire_enum! {
    pub enum Weapon {
        Amraam => "amraam",
        Sidewinder => "sidewinder",
        Mk82 => "mk82",
        Harm => "harm",
        Hellfire => "hellfire",
        Rockets => "rockets",
        CruiseMissile => "cruise-missile",
    }
}

/// What an object on the board is.
///
/// Unit families carry the concrete unit; annotations are plain variants.
/// Serialized as the wire tag (`"viper"`, `"label"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ObjectType {
    Airplane(Airplane),
    Helicopter(Helicopter),
    Ship(Ship),
    Ground(GroundUnit),
    Static(StaticSite),
    Weapon(Weapon),
    Label,
    Measurement,
    Arrow,
    Line,
}

/// Broad family of an [`ObjectType`], used for palettes and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    Airplane,
    Helicopter,
    Ship,
    Ground,
    Static,
    Weapon,
    Annotation,
}

/// A type tag that names no known object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownObjectType(pub String);

impl fmt::Display for UnknownObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown object type {:?}", self.0)
    }
}

impl std::error::Error for UnknownObjectType {}

impl ObjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Airplane(t) => t.as_str(),
            ObjectType::Helicopter(t) => t.as_str(),
            ObjectType::Ship(t) => t.as_str(),
            ObjectType::Ground(t) => t.as_str(),
            ObjectType::Static(t) => t.as_str(),
            ObjectType::Weapon(t) => t.as_str(),
            ObjectType::Label => "label",
            ObjectType::Measurement => "measurement",
            ObjectType::Arrow => "arrow",
            ObjectType::Line => "line",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "label" => Some(ObjectType::Label),
            "measurement" => Some(ObjectType::Measurement),
            "arrow" => Some(ObjectType::Arrow),
            "line" => Some(ObjectType::Line),
            _ => Airplane::from_tag(tag)
                .map(ObjectType::Airplane)
                .or_else(|| Helicopter::from_tag(tag).map(ObjectType::Helicopter))
                .or_else(|| Ship::from_tag(tag).map(ObjectType::Ship))
                .or_else(|| GroundUnit::from_tag(tag).map(ObjectType::Ground))
                .or_else(|| StaticSite::from_tag(tag).map(ObjectType::Static))
                .or_else(|| Weapon::from_tag(tag).map(ObjectType::Weapon)),
        }
    }

    pub fn category(self) -> ObjectCategory {
        match self {
            ObjectType::Airplane(_) => ObjectCategory::Airplane,
            ObjectType::Helicopter(_) => ObjectCategory::Helicopter,
            ObjectType::Ship(_) => ObjectCategory::Ship,
            ObjectType::Ground(_) => ObjectCategory::Ground,
            ObjectType::Static(_) => ObjectCategory::Static,
            ObjectType::Weapon(_) => ObjectCategory::Weapon,
            ObjectType::Label | ObjectType::Measurement | ObjectType::Arrow | ObjectType::Line => {
                ObjectCategory::Annotation
            }
        }
    }

    /// Units are everything that is not an annotation.
    pub fn is_unit(self) -> bool {
        !self.is_annotation()
    }

    pub fn is_annotation(self) -> bool {
        self.category() == ObjectCategory::Annotation
    }

    /// Annotations drawn as a two-point line between their path points.
    pub fn is_line_annotation(self) -> bool {
        matches!(
            self,
            ObjectType::Measurement | ObjectType::Arrow | ObjectType::Line
        )
    }

    /// Whether placing this type starts drawing a flight path.
    pub fn is_movable(self) -> bool {
        matches!(
            self,
            ObjectType::Airplane(_)
                | ObjectType::Helicopter(_)
                | ObjectType::Ship(_)
                | ObjectType::Ground(_)
                | ObjectType::Weapon(_)
        )
    }

    /// Whether this type can lead wingmen.
    pub fn supports_formation(self) -> bool {
        matches!(
            self,
            ObjectType::Airplane(_)
                | ObjectType::Helicopter(_)
                | ObjectType::Ship(_)
                | ObjectType::Ground(_)
        )
    }

    /// Speed given to a freshly placed object.
    pub fn default_speed_knots(self) -> f64 {
        match self {
            ObjectType::Airplane(Airplane::Warthog | Airplane::Albatros | Airplane::Hercules) => {
                200.0
            }
            ObjectType::Airplane(_) => 400.0,
            ObjectType::Helicopter(Helicopter::Huey) => 100.0,
            ObjectType::Helicopter(_) => 150.0,
            ObjectType::Ship(_) => 30.0,
            ObjectType::Ground(GroundUnit::Manpad | GroundUnit::Infantry) => 10.0,
            ObjectType::Ground(_) => 50.0,
            ObjectType::Weapon(Weapon::Mk82) => 300.0,
            ObjectType::Weapon(_) => 1000.0,
            ObjectType::Static(_)
            | ObjectType::Label
            | ObjectType::Measurement
            | ObjectType::Arrow
            | ObjectType::Line => 0.0,
        }
    }

    /// Smoothing weight used while drawing this type's path (0 = none).
    pub fn default_path_smoothness(self) -> f64 {
        match self {
            ObjectType::Helicopter(_) => 0.2,
            ObjectType::Ship(_) => 0.5,
            ObjectType::Ground(GroundUnit::Manpad | GroundUnit::Infantry) => 0.05,
            ObjectType::Ground(_) => 0.15,
            ObjectType::Weapon(Weapon::Mk82) => 0.8,
            ObjectType::Weapon(Weapon::Sidewinder) => 0.3,
            ObjectType::Weapon(Weapon::Harm) => 0.7,
            ObjectType::Weapon(_) => 0.5,
            _ => 0.0,
        }
    }

    /// Creation mode used while drawing this type's path.
    pub fn default_creation_mode(self) -> CreationMode {
        if self.default_path_smoothness() > 0.0 {
            CreationMode::FlySmooth
        } else {
            CreationMode::Normal
        }
    }

    pub fn default_end_type(self) -> Option<EndType> {
        match self {
            ObjectType::Weapon(_) => Some(EndType::ExplosionMedium),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ObjectType {
    type Error = UnknownObjectType;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        ObjectType::from_tag(&tag).ok_or(UnknownObjectType(tag))
    }
}

impl From<ObjectType> for String {
    fn from(object_type: ObjectType) -> Self {
        object_type.as_str().to_string()
    }
}

/// How pointer samples are turned into control points while drawing a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationMode {
    /// Distance-gated sampling.
    #[default]
    Normal,
    /// Extend along the previous segment, ignoring sideways jitter.
    FlyStraight,
    /// Blend the previous heading into each new segment.
    FlySmooth,
    /// Snap each segment to the dominant axis. Best effort.
    FlyCardinals,
}
