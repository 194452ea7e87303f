use super::*;

#[test]
fn test_from_vec() {
    let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
}

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[1.0, 2.0]);
    assert_eq!(v.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_empty() {
    let v = Vector::<f32>::from_vec(vec![]);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn test_index() {
    let v = Vector::<f32>::from_slice(&[1.0, 2.0, 3.0]);
    assert!((v[1] - 2.0).abs() < f32::EPSILON);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[3.0, 4.0]);
    assert!((v.norm_squared() - 25.0).abs() < 1e-6);
    assert!((v.norm() - 5.0).abs() < 1e-6);
}

#[test]
fn test_sub() {
    let a = Vector::from_slice(&[5.0, 7.0]);
    let b = Vector::from_slice(&[2.0, 3.0]);
    let d = &a - &b;
    assert_eq!(d.as_slice(), &[3.0, 4.0]);
}

#[test]
fn test_sub_gives_squared_distance() {
    let a = Vector::from_slice(&[1.0, 1.0]);
    let b = Vector::from_slice(&[4.0, 5.0]);
    let d = (&a - &b).norm_squared();
    assert!((d - 25.0).abs() < 1e-6);
}

#[test]
#[should_panic(expected = "Vector lengths must match")]
fn test_sub_length_mismatch_panics() {
    let a = Vector::from_slice(&[1.0, 2.0]);
    let b = Vector::from_slice(&[1.0]);
    let _ = &a - &b;
}

#[test]
fn test_iter() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let collected: Vec<f32> = v.iter().copied().collect();
    assert_eq!(collected, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_serde_round_trip() {
    let v = Vector::from_slice(&[1.5, -2.0]);
    let json = serde_json::to_string(&v).unwrap();
    let back: Vector<f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
