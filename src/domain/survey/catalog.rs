//! Question catalog - the static corpus of survey questions.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::question::{Choice, Question, QuestionCategory};
use crate::domain::foundation::ValidationError;
use crate::domain::traits::{TraitDelta, TraitDimension};

/// An ordered, immutable set of questions with id lookup.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

impl QuestionCatalog {
    /// Builds a catalog, rejecting duplicate question ids and invalid questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(questions.len());
        let mut seen = HashSet::with_capacity(questions.len());
        for (i, q) in questions.iter().enumerate() {
            q.validate()?;
            if !seen.insert(q.id.as_str()) {
                return Err(ValidationError::duplicate("question_id", q.id.as_str()));
            }
            index.insert(q.id.to_string(), i);
        }
        Ok(Self { questions, index })
    }

    /// The built-in 18-question DamBTI survey.
    pub fn standard() -> &'static QuestionCatalog {
        &STANDARD_CATALOG
    }

    /// All questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Finds a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Resolves a `(question id, choice key)` reference.
    ///
    /// Returns `None` if either the question or the choice does not exist.
    pub fn resolve(&self, question_id: &str, choice_key: &str) -> Option<&Choice> {
        self.question(question_id)?.choice(choice_key)
    }
}

fn effects(pairs: &[(TraitDimension, i32)]) -> TraitDelta {
    pairs
        .iter()
        .fold(TraitDelta::NONE, |delta, (dim, value)| delta.with(*dim, *value))
}

fn choice(
    key: &str,
    text: &str,
    pairs: &[(TraitDimension, i32)],
) -> Result<Choice, ValidationError> {
    Choice::new(key, text, effects(pairs))
}

fn standard_questions() -> Result<Vec<Question>, ValidationError> {
    use QuestionCategory::*;
    use TraitDimension::{Input, Purpose, Release, Scale, Stability, Storage};

    Ok(vec![
        // Storage / Pace
        Question::new("Q1", A, "普段、予定やタスクはどういう状態のときが一番落ち着く？", vec![
            choice("A", "余裕をかなり残しておきたい", &[(Storage, 15), (Stability, 10)])?,
            choice("B", "ほどほどに埋まっているのがちょうどいい", &[(Storage, 5)])?,
            choice("C", "けっこうパンパンになってから本気出す", &[(Storage, -10), (Release, 5)])?,
            choice("D", "その日その日でムラがある", &[(Storage, 0), (Stability, -10)])?,
        ])?,
        Question::new("Q2", A, "新しいことを始めるとき、どんなスタートが多い？", vec![
            choice("A", "ちょっとずつ様子を見ながら始める", &[(Input, -5), (Stability, 5)])?,
            choice("B", "必要なものを揃えてから一気に始める", &[(Storage, 10)])?,
            choice("C", "ノリと勢いで、とりあえず動きながら考える", &[(Input, 10), (Release, 5)])?,
        ])?,
        Question::new("Q3", A, "頼まれごとや仕事が積み上がってきたときの感覚は？", vec![
            choice("A", "こまめに処理して、あまり溜めないようにする", &[(Storage, -5), (Stability, 10)])?,
            choice("B", "ある程度溜まってからまとめて片付ける", &[(Storage, 10)])?,
            choice("C", "気づいたら山になっていて、そこから一気に片付ける", &[(Storage, 15), (Release, 10)])?,
        ])?,
        Question::new("Q4", A, "「余白」についてどう感じる？", vec![
            choice("A", "余白がないと不安になる", &[(Storage, 10)])?,
            choice("B", "多少の余白があれば大丈夫", &[(Storage, 5)])?,
            choice("C", "余白があると逆に落ち着かないことがある", &[(Storage, -10), (Input, 5)])?,
        ])?,
        // Release / Output
        Question::new("Q5", B, "アイデアや成果物を人に見せるタイミングは？", vec![
            choice("A", "できたらすぐ見せる", &[(Release, 15)])?,
            choice("B", "ある程度整えてから見せる", &[(Release, 5)])?,
            choice("C", "完成度がかなり高くなるまで見せない", &[(Release, -10), (Stability, 5)])?,
        ])?,
        Question::new("Q6", B, "ちょっとしんどい感情やモヤモヤが溜まったときは？", vec![
            choice("A", "すぐ誰かに話したり、何かに書いて外に出す", &[(Release, 10), (Input, 5)])?,
            choice("B", "しばらく自分の中で温めてから整理して出す", &[(Release, 0)])?,
            choice("C", "だいぶ溢れてからまとめて処理する／そもそもあまり出さない", &[(Release, -10), (Stability, 10)])?,
        ])?,
        Question::new("Q7", B, "集中して作業したとき、その後どうなる？", vec![
            choice("A", "ちょこちょこ休みながら続けるタイプ", &[(Release, 5), (Stability, 5)])?,
            choice("B", "一気にやって、そのあとはしばらく動けなくなる", &[(Release, 15), (Stability, -5)])?,
            choice("C", "集中と休憩の波を何度も繰り返すのが普通", &[(Release, 0)])?,
        ])?,
        Question::new("Q8", B, "自分のペースが乱れたとき、戻し方は？", vec![
            choice("A", "まず小さいところから整え直す", &[(Stability, 10)])?,
            choice("B", "大掃除みたいに一気にリセットしたくなる", &[(Release, 10), (Stability, -5)])?,
            choice("C", "いつの間にか戻っているのであまり気にしない", &[(Stability, 0)])?,
        ])?,
        // Input Response
        Question::new("Q9", C, "急な予定変更やトラブルが入ったときの反応は？", vec![
            choice("A", "すぐ対応モードに切り替える", &[(Input, 15)])?,
            choice("B", "いったん状況を整理してから動く", &[(Input, 5)])?,
            choice("C", "かなり動揺する／しばらく固まることがある", &[(Input, -10), (Stability, -5)])?,
        ])?,
        Question::new("Q10", C, "周りからの刺激（誘い・イベント・話題）が多い環境は？", vec![
            choice("A", "刺激が多いほうが楽しい", &[(Input, 10)])?,
            choice("B", "適度なら大丈夫だが、多すぎると疲れる", &[(Input, 0)])?,
            choice("C", "静かなほうが本領を発揮できる", &[(Input, -10), (Stability, 5)])?,
        ])?,
        Question::new("Q11", C, "「やる気スイッチ」が入るきっかけに近いのは？", vec![
            choice("A", "期限やプレッシャーが見えてきたとき", &[(Input, 10)])?,
            choice("B", "自分の中でイメージや見通しがはっきりしたとき", &[(Stability, 10)])?,
            choice("C", "誰かとの会話や思いつきで急に火がつく", &[(Input, 15)])?,
        ])?,
        Question::new("Q12", C, "予定が立て込んで洪水のようになったとき、どうなりがち？", vec![
            choice("A", "優先度を付けて冷静にさばこうとする", &[(Stability, 10)])?,
            choice("B", "どこかで一気に崩れて全部入れ替えたくなる", &[(Release, 10), (Stability, -5)])?,
            choice("C", "そもそもそこまで積み上げないようにする", &[(Storage, -5)])?,
        ])?,
        // Role / Purpose
        Question::new("Q13", D, "自分の行動の中で「一番大事」と感じやすいものは？", vec![
            choice("A", "周りや全体の安全・安定を守ること", &[(Purpose, -10), (Stability, 10)])?,
            choice("B", "目に見える成果やアウトプットを出すこと", &[(Purpose, -5), (Release, 10)])?,
            choice("C", "誰かの役に立ったり、支えること", &[(Purpose, -5)])?,
            choice("D", "その場その場でいろんな役を切り替えること", &[(Purpose, 15)])?,
        ])?,
        Question::new("Q14", D, "人との関わり方で近いのは？", vec![
            choice("A", "水道みたいに、必要なときに静かに支えたい", &[(Purpose, -10)])?,
            choice("B", "電気みたいに、エネルギーや勢いを渡したい", &[(Purpose, -5), (Release, 10)])?,
            choice("C", "公園の池みたいに、場そのものの雰囲気を作りたい", &[(Purpose, 5)])?,
            choice("D", "特に決めず、その時の形に合わせて変わりたい", &[(Purpose, 15)])?,
        ])?,
        Question::new("Q15", D, "一つの活動やプロジェクトに対するスタンスは？", vec![
            choice("A", "役割を決めて長く関わるほうが好き", &[(Stability, 10)])?,
            choice("B", "集中的に力を入れて、一定のところで区切りたい", &[(Release, 10)])?,
            choice("C", "いろんなものを横断しながらシフトしていくのが好き", &[(Purpose, 10)])?,
        ])?,
        // Scale / Time
        Question::new("Q16", E, "どれくらいのスケールの物事がしっくりくる？", vec![
            choice("A", "目の前の小さなことを確実にやる", &[(Scale, -15)])?,
            choice("B", "チームやコミュニティ単位くらいがちょうどいい", &[(Scale, 0)])?,
            choice("C", "もっと広い範囲や長期スパンで考えるのが好き", &[(Scale, 15)])?,
        ])?,
        Question::new("Q17", E, "自分の変化についての感覚は？", vec![
            choice("A", "ゆっくり少しずつ変わってきた感覚がある", &[(Stability, 10)])?,
            choice("B", "何度か大きな転機・ジャンプがあった", &[(Stability, 0)])?,
            choice("C", "ふと振り返るとガラッと変わっていることが多い", &[(Stability, -10)])?,
        ])?,
        Question::new("Q18", E, "「完成」という言葉に近いイメージは？", vec![
            choice("A", "ほぼ形が変わらない安定した状態", &[(Stability, 15)])?,
            choice("B", "必要になれば少しずつ手を入れていく状態", &[(Stability, 5)])?,
            choice("C", "完成してもまた次の形に流れていく途中の状態", &[(Stability, -10)])?,
        ])?,
    ])
}

static STANDARD_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    standard_questions()
        .and_then(QuestionCatalog::new)
        .expect("built-in question catalog is valid")
});
