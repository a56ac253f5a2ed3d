//! Fixed-order Gauss-Legendre quadrature.
//!
//! The abscissae are the roots of the degree-24 Legendre polynomial on
//! `[-1, 1]`, listed in symmetric pairs with their weights. The rule is
//! non-adaptive: it integrates polynomials up to degree 47 exactly and
//! approximates everything else, which is plenty for the arc-length
//! integrands of low-degree Bezier curves.

/// Abscissae of the 24-point Gauss-Legendre rule on `[-1, 1]`.
const ABSCISSAE: [f64; 24] = [
    -0.064_056_892_862_605_626_085_043_082_624_745,
    0.064_056_892_862_605_626_085_043_082_624_745,
    -0.191_118_867_473_616_309_158_639_820_757_07,
    0.191_118_867_473_616_309_158_639_820_757_07,
    -0.315_042_679_696_163_374_386_793_291_319_81,
    0.315_042_679_696_163_374_386_793_291_319_81,
    -0.433_793_507_626_045_138_487_084_231_913_35,
    0.433_793_507_626_045_138_487_084_231_913_35,
    -0.545_421_471_388_839_535_658_375_617_218_37,
    0.545_421_471_388_839_535_658_375_617_218_37,
    -0.648_093_651_936_975_569_252_495_786_910_75,
    0.648_093_651_936_975_569_252_495_786_910_75,
    -0.740_124_191_578_554_364_243_828_103_099_98,
    0.740_124_191_578_554_364_243_828_103_099_98,
    -0.820_001_985_973_902_921_953_949_872_669_75,
    0.820_001_985_973_902_921_953_949_872_669_75,
    -0.886_415_527_004_401_034_213_154_341_982_2,
    0.886_415_527_004_401_034_213_154_341_982_2,
    -0.938_274_552_002_732_758_523_649_001_708_72,
    0.938_274_552_002_732_758_523_649_001_708_72,
    -0.974_728_555_971_309_498_198_391_993_008_17,
    0.974_728_555_971_309_498_198_391_993_008_17,
    -0.995_187_219_997_021_360_179_997_409_700_74,
    0.995_187_219_997_021_360_179_997_409_700_74,
];

/// Weights paired with [`ABSCISSAE`].
const WEIGHTS: [f64; 24] = [
    0.127_938_195_346_752_156_974_056_165_224_7,
    0.127_938_195_346_752_156_974_056_165_224_7,
    0.125_837_456_346_828_296_121_375_382_511_18,
    0.125_837_456_346_828_296_121_375_382_511_18,
    0.121_670_472_927_803_391_204_463_153_476_26,
    0.121_670_472_927_803_391_204_463_153_476_26,
    0.115_505_668_053_725_601_353_344_483_906_78,
    0.115_505_668_053_725_601_353_344_483_906_78,
    0.107_444_270_115_965_634_782_577_342_446_61,
    0.107_444_270_115_965_634_782_577_342_446_61,
    0.097_618_652_104_113_888_269_880_664_464_247,
    0.097_618_652_104_113_888_269_880_664_464_247,
    0.086_190_161_531_953_275_917_185_202_983_743,
    0.086_190_161_531_953_275_917_185_202_983_743,
    0.073_346_481_411_080_305_734_033_615_253_117,
    0.073_346_481_411_080_305_734_033_615_253_117,
    0.059_298_584_915_436_780_746_367_758_500_109,
    0.059_298_584_915_436_780_746_367_758_500_109,
    0.044_277_438_817_419_806_168_602_748_211_338,
    0.044_277_438_817_419_806_168_602_748_211_338,
    0.028_531_388_628_933_663_181_307_815_951_878,
    0.028_531_388_628_933_663_181_307_815_951_878,
    0.012_341_229_799_987_199_546_805_667_070_037,
    0.012_341_229_799_987_199_546_805_667_070_037,
];

/// Integrates `f` over `[0, 1]` with the fixed 24-point rule.
///
/// The quadrature domain `[-1, 1]` is mapped to `[0, 1]` via
/// `t = x / 2 + 1 / 2`, and the weighted sum is scaled by the Jacobian
/// of that map (1/2).
#[must_use]
pub fn integrate_unit<F>(f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    const HALF: f64 = 0.5;
    let sum: f64 = ABSCISSAE
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(x, w)| w * f(HALF * x + HALF))
        .sum();
    HALF * sum
}
