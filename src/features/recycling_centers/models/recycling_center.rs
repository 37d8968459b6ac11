/// A recycling center from the built-in directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecyclingCenter {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub certified: bool,
}

/// Demo directory; there is no way to add or edit centers
pub const RECYCLING_CENTERS: &[RecyclingCenter] = &[
    RecyclingCenter {
        id: "rc_001",
        name: "ReciclaTech SAS",
        address: "Calle 10 # 5-20",
        certified: true,
    },
    RecyclingCenter {
        id: "rc_002",
        name: "Centro Verde",
        address: "Av. Principal 123",
        certified: true,
    },
    RecyclingCenter {
        id: "rc_003",
        name: "Gestiona E-Waste",
        address: "Carrera 34 # 12-45",
        certified: false,
    },
];
