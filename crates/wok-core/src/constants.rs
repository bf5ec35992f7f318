// Shared dimensional and pricing constants used by the engines and both
// front-ends. Lengths are in inches unless the name says otherwise.

// Input bounds
pub const MIN_BURNERS: usize = 1;
pub const MAX_BURNERS: usize = 6;
pub const DEFAULT_BURNER_COUNT: usize = 2;
pub const BURNER_DIAMETERS_IN: [u32; 5] = [13, 15, 17, 19, 21];

pub const DEFAULT_MIN_GAP_IN: f32 = 4.0; // not user-editable in the base configuration
pub const MIN_GAP_MIN_IN: f32 = 1.0;
pub const MIN_GAP_MAX_IN: f32 = 12.0;
pub const KITCHEN_WIDTH_MIN_IN: f32 = 24.0;
pub const KITCHEN_WIDTH_MAX_IN: f32 = 120.0;
pub const DEFAULT_KITCHEN_WIDTH_IN: f32 = 60.0;
pub const UNIT_SCALE_MIN: f32 = 0.01;
pub const UNIT_SCALE_MAX: f32 = 1.0;
pub const DEFAULT_UNIT_SCALE: f32 = 0.1; // scene units per inch

// Chassis geometry
pub const SIDE_PADDING_IN: f32 = 1.0; // each end of the chassis
pub const CHASSIS_DEPTH_IN: f32 = 30.0;
pub const LIP_HEIGHT_IN: f32 = 4.0; // rear lip above the tray
pub const TRAY_THICKNESS_IN: f32 = 2.0;
pub const WELL_DEPTH_IN: f32 = 6.0; // wells hang below the tray
pub const COUNTER_HEIGHT_IN: f32 = 32.0; // floor to top of tray
pub const DEPTH_SAFETY_MARGIN_IN: f32 = 1.0; // kept clear between a well and the chassis edge
pub const LEG_INSET_IN: f32 = 2.0;
pub const MAX_LEG_SPAN_IN: f32 = 48.0;
pub const MAX_LEGS_PER_ROW: usize = 16; // caps runaway spans from non-scheduled input
pub const LEG_SIZE_IN: f32 = 1.5; // square tube
pub const FAUCET_HEIGHT_IN: f32 = 3.0; // above the tray top
pub const FAUCET_SIZE_IN: f32 = 1.0;

// Pricing (whole US dollars)
pub const SINGLE_UNIT_SURCHARGE_USD: u32 = 250;
