//! Shape matrices and the clockwise rotation transform.

use blockfall::core::Shape;
use blockfall::types::PieceKind;

#[test]
fn four_clockwise_turns_restore_every_shape() {
    for kind in PieceKind::ALL {
        let original = kind.canonical_shape();
        let back = original
            .rotated_cw()
            .rotated_cw()
            .rotated_cw()
            .rotated_cw();
        assert_eq!(back, original, "{:?}", kind);
    }
}

#[test]
fn rotation_swaps_the_bounding_box() {
    for kind in PieceKind::ALL {
        let shape = kind.canonical_shape();
        let rotated = shape.rotated_cw();
        assert_eq!(rotated.width(), shape.height(), "{:?}", kind);
        assert_eq!(rotated.height(), shape.width(), "{:?}", kind);
        assert_eq!(rotated.cells().count(), 4, "{:?}", kind);
    }
}

#[test]
fn canonical_shapes_match_their_matrices() {
    assert_eq!(
        PieceKind::I.canonical_shape(),
        Shape::from_rows(&[&[1, 1, 1, 1]])
    );
    assert_eq!(
        PieceKind::T.canonical_shape(),
        Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]])
    );
    assert_eq!(
        PieceKind::S.canonical_shape(),
        Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]])
    );
    assert_eq!(
        PieceKind::Z.canonical_shape(),
        Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]])
    );
    assert_eq!(
        PieceKind::L.canonical_shape(),
        Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]])
    );
    assert_eq!(
        PieceKind::J.canonical_shape(),
        Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]])
    );
}

#[test]
fn l_and_j_mirror_each_other() {
    let l = PieceKind::L.canonical_shape();
    let j = PieceKind::J.canonical_shape();
    let width = l.width();
    for (x, y) in l.cells() {
        assert!(j.is_set((width as i16 - 1 - x) as u16, y as u16));
    }
}

#[test]
fn no_shape_exceeds_the_maximum_extent() {
    for kind in PieceKind::ALL {
        let mut shape = kind.canonical_shape();
        for _ in 0..4 {
            assert!(shape.width() <= 4 && shape.height() <= 4, "{:?}", kind);
            shape = shape.rotated_cw();
        }
    }
}
