#![allow(non_snake_case)]

// Kernel outputs checked against independently computed values.  The
// reference data carries about seven significant digits, hence the
// tolerances.

use approx::assert_abs_diff_eq;
use minimath::algebra::{vecmath::*, *};

const TOL: f64 = 1e-6;

const A5: [f64; 5] = [0.5047416, 0.80271857, 0.41445293, 0.14721594, 0.47666535];
const B5: [f64; 5] = [0.7004754, 0.52089919, 0.15618081, 0.96927019, 0.55339517];

#[rustfmt::skip]
const S55: DenseMatrixSym5 = DenseMatrixSym5::new([
    0.41974018, 0.92003082, 1.004335,  1.30167,   0.87259315,
                0.91868919, 1.1176797, 1.2953584, 0.60691799,
                            1.3854073, 1.0001464, 0.73574336,
                                       1.8231297, 1.1258482,
                                                  0.40574078,
]);

#[rustfmt::skip]
const M35: DenseMatrixMN<3, 5> = DenseMatrixMN::new([
    [0.27385016, 0.37604514,  0.91209475, 0.93284312,  0.27634535],
    [0.79741259, 0.94574321,  0.23214214, 0.27074102,  0.44384911],
    [0.68883162, 0.069744802, 0.2323944,  0.073613799, 0.81272502],
]);

#[rustfmt::skip]
const M53: DenseMatrixMN<5, 3> = DenseMatrixMN::new([
    [0.42868455, 0.96784151,  0.50407678],
    [0.50540621, 0.22897339,  0.15036613],
    [0.93139262, 0.22178075,  0.78665219],
    [0.57617856, 0.87582742,  0.20284634],
    [0.60838134, 0.037992089, 0.060601891],
]);

const A_X_S55: [f64; 5] = [1.9741972, 2.1450465, 2.4762389, 2.9163754, 1.5916948];
const A_X_M53: [f64; 3] = [1.3829093, 0.91127402, 0.75990955];
const A_X_M35T: [f64; 3] = [1.087156, 1.5092898, 0.89821894];

const SCALE: f64 = -3.0;

fn assert_all_close(x: &[f64], y: &[f64], tol: f64) {
    assert_eq!(x.len(), y.len());
    for (&x, &y) in x.iter().zip(y) {
        assert_abs_diff_eq!(x, y, epsilon = tol);
    }
}

// -------------------------------------
// vector kernels
// -------------------------------------

#[test]
fn test_vec_norm_dot() {
    assert_abs_diff_eq!(norm2_sq(&A5), 1.31977481447686, epsilon = TOL);
    assert_abs_diff_eq!(norm2(&A5), 1.31977481447686f64.sqrt(), epsilon = TOL);
    assert_abs_diff_eq!(dot(&A5, &B5), 1.24290044685416, epsilon = TOL);
}

#[test]
fn test_vec_add_sub() {
    let sum: Vec<f64> = A5.iter().zip(&B5).map(|(a, b)| a + b).collect();
    let diff: Vec<f64> = A5.iter().zip(&B5).map(|(a, b)| a - b).collect();
    let twice_a_plus_sb: Vec<f64> = A5
        .iter()
        .zip(&B5)
        .map(|(a, b)| 2. * a + SCALE * b)
        .collect();

    let mut out = [0.; 5];
    add_vec_vout(&A5, &B5, &mut out);
    assert_all_close(&out, &sum, TOL);

    let mut v = A5;
    sub_vec(&mut v, &B5);
    assert_all_close(&v, &diff, TOL);

    let mut out = A5;
    add_vec_vaccum_scaled(&A5, &B5, &mut out, SCALE);
    assert_all_close(&out, &twice_a_plus_sb, TOL);
}

// -------------------------------------
// matrix-vector kernels
// -------------------------------------

#[test]
fn test_sym55_vec() {
    let mut out = [0.; 5];
    S55.mul_vec_vout(&A5, &mut out);
    assert_all_close(&out, &A_X_S55, TOL);

    let mut v = A5;
    S55.mul_vec(&mut v);
    assert_all_close(&v, &A_X_S55, TOL);

    let expected: Vec<f64> = A_X_S55.iter().zip(&A5).map(|(p, a)| p + a).collect();
    let mut v = A5;
    S55.mul_vec_vaccum(&A5, &mut v);
    assert_all_close(&v, &expected, TOL);
}

#[test]
fn test_sym55_vec_scaled() {
    let scaled: Vec<f64> = A_X_S55.iter().map(|p| SCALE * p).collect();

    let mut out = [0.; 5];
    S55.mul_vec_vout_scaled(&A5, &mut out, SCALE);
    assert_all_close(&out, &scaled, TOL);

    let mut v = A5;
    S55.mul_vec_scaled(&mut v, SCALE);
    assert_all_close(&v, &scaled, TOL);

    let expected: Vec<f64> = scaled.iter().zip(&A5).map(|(p, a)| p + a).collect();
    let mut v = A5;
    S55.mul_vec_vaccum_scaled(&A5, &mut v, SCALE);
    assert_all_close(&v, &expected, TOL);
}

#[test]
fn test_dense53_vec() {
    let mut out = [0.; 3];
    M53.mul_vec_vout(&A5, &mut out);
    assert_all_close(&out, &A_X_M53, TOL);

    M53.mul_vec_vout_scaled(&A5, &mut out, SCALE);
    let scaled: Vec<f64> = A_X_M53.iter().map(|p| SCALE * p).collect();
    assert_all_close(&out, &scaled, TOL);

    // in place writes the leading three entries
    let mut v = A5;
    M53.mul_vec(&mut v);
    assert_all_close(&v[..3], &A_X_M53, TOL);
    assert_all_close(&v[3..], &A5[3..], 0.);

    let mut out = [A5[0], A5[1], A5[2]];
    M53.mul_vec_vaccum(&A5, &mut out);
    let expected: Vec<f64> = A_X_M53.iter().zip(&A5).map(|(p, a)| p + a).collect();
    assert_all_close(&out, &expected, TOL);
}

#[test]
fn test_dense35_vec_transposed() {
    let mut out = [0.; 3];
    M35.mul_vec_t_vout(&A5, &mut out);
    assert_all_close(&out, &A_X_M35T, TOL);

    let mut v = A5;
    M35.mul_vec_t_scaled(&mut v, SCALE);
    let scaled: Vec<f64> = A_X_M35T.iter().map(|p| SCALE * p).collect();
    assert_all_close(&v[..3], &scaled, TOL);

    let mut out = [A5[0], A5[1], A5[2]];
    M35.mul_vec_t_vaccum_scaled(&A5, &mut out, SCALE);
    let expected: Vec<f64> = scaled.iter().zip(&A5).map(|(p, a)| p + a).collect();
    assert_all_close(&out, &expected, TOL);
}

// -------------------------------------
// 3x3 symmetric kernels
// -------------------------------------

const S3_A: DenseMatrixSym3 = DenseMatrixSym3::new([
    1.7154671, 0.32440803, 1.5281059, 1.3319233, 1.4894104, 1.8696738,
]);
const S3_B: DenseMatrixSym3 = DenseMatrixSym3::new([
    1.3211548, 1.6953079, 0.46298047, 1.4032645, 1.2392179, 1.5834584,
]);

#[test]
fn test_sym3_sandwich() {
    let mut out = DenseMatrixSym3::zeros();
    S3_A.sandwich_vout(&S3_B, &mut out);
    assert_all_close(
        &out.data,
        &[13.276035, 13.530868, 19.975459, 12.970227, 19.287342, 28.997443],
        TOL,
    );
}

#[test]
fn test_sym3_conj() {
    let a3 = [0.93668206, 0.5618703, 0.71166218];
    let b3 = [0.86716519, 0.22144078, 0.83853122];
    assert_abs_diff_eq!(S3_A.conj(&a3, &b3), 5.9799184, epsilon = TOL);
}

// -------------------------------------
// cofactor inversion
// -------------------------------------

#[test]
fn test_sym3_inverse() {
    let S = DenseMatrixSym3::new([0.471011, 1.6661985, 0.98615889, 0.32707543, 1.0342404, 0.49936779]);
    let mut C = DenseMatrixSym3::zeros();
    let det = S.cofactors(&mut C);
    assert_abs_diff_eq!(det, 1.26747089766342, epsilon = TOL);

    // S * adj(S) / det(S) = I
    let mut I = DenseMatrix3::zeros();
    S.mul_sym_vout_scaled(&C, &mut I, 1. / det);
    assert!(I.norm_inf_diff(&DenseMatrix3::identity()) < TOL);

    let Sinv = S.try_inverse(&InversionSettings::default()).unwrap();
    assert_all_close(Sinv.data(), C.data.map(|c| c / det).as_slice(), 1e-12);
}

#[rustfmt::skip]
#[test]
fn test_triu_inverse() {
    let U2 = DenseMatrixTriu2::new([0.57218581, 0.96981434, 0.44706582]);
    assert_all_close(&U2.inverse_unchecked().data, &[1.74768404, -3.7912293, 2.23680709], TOL);

    let U3 = DenseMatrixTriu3::new([0.3143549, 0.48010021, 0.98662155, 0.17672097, 0.241954, 0.71325572]);
    assert_all_close(
        &U3.inverse_unchecked().data,
        &[3.18111791, -8.64218538, -1.46868528, 5.65863807, -1.91955014, 1.40202171],
        TOL,
    );

    let U4 = DenseMatrixTriu4::new([
        0.69412981, 0.77539124, 0.55602195, 0.97512905,
                    0.38083716, 0.05308887, 0.53878659,
                                0.65848863, 0.11064253,
                                            0.85354224,
    ]);
    assert_all_close(
        &U4.inverse_unchecked().data,
        &[
            1.44065272, -2.93319458, -0.97999346, 0.33269888,
                         2.62579416, -0.21169756, -1.63005399,
                                      1.5186291,  -0.19685606,
                                                   1.17158817,
        ],
        TOL,
    );

    let U5 = DenseMatrixTriu5::new([
        0.86692312, 0.0431848, 0.87871003, 0.24380479, 0.5625632,
                    0.31158425, 0.32071057, 0.98432269, 0.6176679,
                                0.29743654, 0.03104779, 0.94812118,
                                            0.89684428, 0.53583566,
                                                        0.55817574,
    ]);
    assert_all_close(
        &U5.inverse_unchecked().data,
        &[
            1.15350482, -0.1598729, -3.23539034, -0.02610461,  4.53505711,
                         3.20940484, -3.46053666, -3.40265092,  5.59308334,
                                      3.36206165, -0.11639096, -5.59908856,
                                                   1.11502077, -1.07039387,
                                                                1.79155045,
        ],
        TOL,
    );
}

#[rustfmt::skip]
#[test]
fn test_tril_inverse() {
    let L2 = DenseMatrixTril2::new([0.62669575, 0.16808425, 0.05153309]);
    assert_all_close(&L2.inverse_unchecked().data, &[1.59567063, -5.20456104, 19.40500797], TOL);

    let L3 = DenseMatrixTril3::new([0.73281257, 0.15663661, 0.6252232, 0.32331516, 0.49048184, 0.68948659]);
    assert_all_close(
        &L3.inverse_unchecked().data,
        &[1.36460541, -0.34187337, 1.59942882, -0.39669363, -1.13778978, 1.45035454],
        TOL,
    );

    let L4 = DenseMatrixTril4::new([
        0.16449536,
        0.38291535, 0.79820702,
        0.2376585,  0.53143921, 0.41291111,
        0.55820531, 0.98338752, 0.4130384, 0.59041151,
    ]);
    assert_all_close(
        &L4.inverse_unchecked().data,
        &[
            6.07919888,
           -2.91630931,  1.25280783,
            0.254456211,-1.61243225,  2.42182873,
           -1.06820260, -0.958651938,-1.69425606, 1.69373393,
        ],
        TOL,
    );

    // nearly singular in the leading entry, so the inverse is large
    // and only good to a few digits
    let L5 = DenseMatrixTril5::new([
        0.00096286,
        0.02479833, 0.76528692,
        0.58960537, 0.90182694, 0.15462504,
        0.64151936, 0.42728706, 0.50315051, 0.86653404,
        0.76332981, 0.1009956,  0.25110659, 0.21694558, 0.86720055,
    ]);
    assert_all_close(
        &L5.inverse_unchecked().data,
        &[
            1038.57381,
           -33.6539136,   1.30669945,
           -3763.93566,  -7.62112526,  6.46725801,
            1433.22799,   3.78085244, -3.75519490,  1.15402276,
           -178.919266,   1.10874542, -0.933230681,-0.288699237, 1.15313580,
        ],
        1e-2,
    );
}

#[test]
fn test_inverse_rejects_singular() {
    // second row is twice the first
    let S = DenseMatrixSym2::new([1., 2., 4.]);
    let err = S.try_inverse(&InversionSettings::default()).unwrap_err();
    assert_eq!(err, InversionError::Singular { det: 0. });
    assert!(err.to_string().contains("singular"));
}
