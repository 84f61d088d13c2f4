use super::element;
use super::error::ModelError;
use nalgebra::Point3;

/// An atom: a point in space tagged with a chemical element and an id.
///
/// Atoms are immutable once constructed. A renderer may transform coordinates
/// for display, but the source record is never edited in place; a changed atom is
/// a new `Atom`.
///
/// Both `element_number` and `id` are kept within the signed 32-bit range so
/// that [`AtomRecord`](crate::core::export::AtomRecord) export never truncates
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub(crate) element_number: u32,
    pub(crate) position: Point3<f64>,
    pub(crate) id: u32,
}

impl Atom {
    /// Creates a new atom.
    ///
    /// # Arguments
    ///
    /// * `element_number` - The atomic number (1 for hydrogen, 6 for carbon, ...).
    /// * `position` - The coordinates, in whatever unit the model uses throughout.
    /// * `id` - An identifier expected to be unique within the owning model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidElementNumber`] if `element_number` is zero or
    /// exceeds `i32::MAX`, and [`ModelError::AtomIdOutOfRange`] if `id` exceeds
    /// `i32::MAX`.
    pub fn new(element_number: u32, position: Point3<f64>, id: u32) -> Result<Self, ModelError> {
        if element_number == 0 || element_number > i32::MAX as u32 {
            return Err(ModelError::InvalidElementNumber(element_number as i64));
        }
        if id > i32::MAX as u32 {
            return Err(ModelError::AtomIdOutOfRange(id as i64));
        }
        Ok(Self {
            element_number,
            position,
            id,
        })
    }

    /// Convenience constructor taking bare coordinates.
    pub fn at(element_number: u32, x: f64, y: f64, z: f64, id: u32) -> Result<Self, ModelError> {
        Self::new(element_number, Point3::new(x, y, z), id)
    }

    // Literal reference data is known to be valid.
    pub(crate) fn from_trusted(element_number: u32, x: f64, y: f64, z: f64, id: u32) -> Self {
        Self {
            element_number,
            position: Point3::new(x, y, z),
            id,
        }
    }

    #[inline]
    pub fn element_number(&self) -> u32 {
        self.element_number
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// The element symbol, or `None` for atomic numbers without an assigned
    /// symbol (such atoms are still valid).
    pub fn symbol(&self) -> Option<&'static str> {
        element::symbol(self.element_number)
    }

    /// Returns a copy of this atom carrying a different id.
    pub fn with_id(&self, id: u32) -> Result<Self, ModelError> {
        Self::new(self.element_number, self.position, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_all_fields() {
        let atom = Atom::new(8, Point3::new(0.3722, 0.4851, 0.0), 2).unwrap();
        assert_eq!(atom.element_number(), 8);
        assert_eq!(atom.id(), 2);
        assert_eq!(atom.position(), Point3::new(0.3722, 0.4851, 0.0));
        assert_eq!(atom.x(), 0.3722);
        assert_eq!(atom.y(), 0.4851);
        assert_eq!(atom.z(), 0.0);
        assert_eq!(atom.symbol(), Some("O"));
    }

    #[test]
    fn element_zero_is_rejected() {
        assert_eq!(
            Atom::at(0, 0.0, 0.0, 0.0, 0),
            Err(ModelError::InvalidElementNumber(0))
        );
    }

    #[test]
    fn values_beyond_i32_are_rejected() {
        let too_big = i32::MAX as u32 + 1;
        assert_eq!(
            Atom::at(too_big, 0.0, 0.0, 0.0, 0),
            Err(ModelError::InvalidElementNumber(too_big as i64))
        );
        assert_eq!(
            Atom::at(6, 0.0, 0.0, 0.0, too_big),
            Err(ModelError::AtomIdOutOfRange(too_big as i64))
        );
    }

    #[test]
    fn unassigned_element_numbers_are_valid_but_have_no_symbol() {
        let atom = Atom::at(200, 1.0, 2.0, 3.0, 7).unwrap();
        assert_eq!(atom.element_number(), 200);
        assert_eq!(atom.symbol(), None);
    }

    #[test]
    fn with_id_leaves_the_original_untouched() {
        let original = Atom::at(6, -1.0, 0.0, 0.0, 0).unwrap();
        let renumbered = original.with_id(5).unwrap();
        assert_eq!(original.id(), 0);
        assert_eq!(renumbered.id(), 5);
        assert_eq!(renumbered.position(), original.position());
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::at(1, -0.5339, -0.5162, 0.0, 3).unwrap();
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
