//! 外部協調者の境界。
//!
//! ノルム評価は記号代数と組立エンジンを実装せず、ここで定める trait を通して
//! 「どの組み合わせを要求するか」だけを決める。メッシュ・基底・求積の表現は
//! 実装側が自由に選べる。

use sobolev_types::Field;

/// 場の記号式代数。
///
/// 演算はすべて式を組み立てるだけで数値計算を行わない。演算子の形状が
/// 合わない場合（スカラーの発散など）は `Self::Error` で失敗してよい。
pub trait FormAlgebra {
    /// 記号式。離散場そのものも式の一種として扱う。
    type Expr: Field;
    /// 領域測度を掛けた積分式（の和）。
    type Form;
    type Error: std::error::Error + 'static;

    /// `a - b`
    fn sub(&self, a: &Self::Expr, b: &Self::Expr) -> Result<Self::Expr, Self::Error>;

    /// 全添字を縮約した内積 `(a, b)`。
    fn inner(&self, a: &Self::Expr, b: &Self::Expr) -> Result<Self::Expr, Self::Error>;

    /// スカラー式同士の積 `a · b`。
    fn product(&self, a: &Self::Expr, b: &Self::Expr) -> Result<Self::Expr, Self::Error>;

    fn grad(&self, a: &Self::Expr) -> Result<Self::Expr, Self::Error>;

    fn div(&self, a: &Self::Expr) -> Result<Self::Expr, Self::Error>;

    fn curl(&self, a: &Self::Expr) -> Result<Self::Expr, Self::Error>;

    /// スカラー被積分関数に領域の微分測度 `dx` を掛けて積分式にする。
    fn integrate(&self, integrand: Self::Expr) -> Result<Self::Form, Self::Error>;

    /// 積分式の和。
    fn add_forms(&self, a: Self::Form, b: Self::Form) -> Result<Self::Form, Self::Error>;
}

/// 積分式を 1 つの実数に組み立てるエンジン。
///
/// 失敗（特異系・求積エラーなど）の原因はノルム評価からは不透明で、
/// そのまま呼び出し元へ伝播する。
pub trait Assemble<F> {
    type Error: std::error::Error + 'static;
    type BoundaryConditions;

    fn assemble(
        &self,
        form: &F,
        bcs: Option<&Self::BoundaryConditions>,
    ) -> Result<f64, Self::Error>;
}
