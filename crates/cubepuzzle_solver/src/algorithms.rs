//! Fixed algorithms used by the phase handlers, written relative to a
//! [`crate::Frame`].

use cubepuzzle_core::{FaceTwist, parse_notation};

fn alg(notation: &str) -> Vec<FaceTwist> {
    parse_notation(notation).expect("invalid built-in algorithm")
}

lazy_static! {
    /// Brings an edge at DF with its white sticker facing down to UF.
    pub static ref CROSS_DROP_IN: Vec<FaceTwist> = alg("F2");
    /// Brings an edge at DF with its white sticker facing front to UF.
    pub static ref CROSS_FLIP_IN: Vec<FaceTwist> = alg("D R F' R'");

    /// Swaps the corners at UFR and DFR, twisting them. Does not disturb the
    /// rest of the top layer. Repeating it 6 times is the identity.
    pub static ref CORNER_INSERT: Vec<FaceTwist> = alg("R' D' R D");

    /// Inserts the edge at UF into FR, keeping its front sticker on F.
    pub static ref EDGE_INSERT_FROM_FRONT: Vec<FaceTwist> = alg("U R U' R' U' F' U F");
    /// Inserts the edge at UR into FR, keeping its right sticker on R.
    pub static ref EDGE_INSERT_FROM_RIGHT: Vec<FaceTwist> = alg("U' F' U F U R U' R'");

    /// Turns a horizontal line on the top face into a cross, and a dot into
    /// an L.
    pub static ref TOP_LINE_TO_CROSS: Vec<FaceTwist> = alg("F R U R' U' F'");
    /// Turns an L at back-left on the top face into a cross.
    pub static ref TOP_L_TO_CROSS: Vec<FaceTwist> = alg("F U R U' R' F'");

    /// Swaps the top edges at UF and UL, keeping UR and UB.
    pub static ref SUNE_SWAP_EDGES: Vec<FaceTwist> = alg("R U R' U R U2 R' U");

    /// Keeps the top corner at UFR and cycles UFL -> UBR -> UBL -> UFL.
    pub static ref CYCLE_TOP_CORNERS: Vec<FaceTwist> = alg("U R U' L' U R' U' L");
}
