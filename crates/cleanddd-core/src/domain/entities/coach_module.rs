//! The six coaching modules.
//!
//! Every module has the same shape: explanatory text, one free-text
//! question, a reference answer and an acceptance predicate. The table order
//! is the canonical run order.

/// One present/quiz/score unit of a coaching session.
#[derive(Debug, Clone, Copy)]
pub struct CoachModule {
    /// Menu token that selects this module (`"1"` … `"6"`).
    pub number: &'static str,
    /// Stable identifier, used in logs.
    pub key: &'static str,
    /// Title used in the menu, the notes and the report table.
    pub title: &'static str,
    /// Section heading printed when the module starts.
    pub heading: &'static str,
    /// Paragraphs printed after the heading, each reflowed.
    pub paragraphs: &'static [&'static str],
    /// Checklist items printed verbatim under `检查清单：`.
    pub checklist: &'static [&'static str],
    /// The single quiz question.
    pub question: &'static str,
    /// Printed after the answer, regardless of the verdict.
    pub reference_answer: &'static str,
    accepts: fn(&str) -> bool,
}

impl CoachModule {
    /// Whether `answer` is accepted as correct.
    ///
    /// Matching is a plain substring (or exact token) check on the raw
    /// answer, so an answer such as `不是命令` still counts for the CQRS
    /// module.
    pub fn accepts(&self, answer: &str) -> bool {
        (self.accepts)(answer)
    }

    /// Look a module up by its stable key.
    pub fn by_key(key: &str) -> Option<&'static CoachModule> {
        MODULES.iter().find(|m| m.key == key)
    }
}

/// All modules, in canonical order.
pub static MODULES: [CoachModule; 6] = [
    CoachModule {
        number: "1",
        key: "overview",
        title: "总览与心智模型",
        heading: "模块：CleanDDD 总览与心智模型",
        paragraphs: &[
            "CleanDDD 强调以领域模型为中心，围绕聚合、不变式、领域事件来组织代码。",
            "目标是通过清晰边界与事件驱动，降低耦合，提高可演进性与可测试性。",
        ],
        checklist: &[],
        question: "小测：CleanDDD 中跨聚合的影响应通过什么机制传递？ ",
        reference_answer: "参考答案：通过领域事件驱动跨聚合影响。",
        accepts: accepts_overview,
    },
    CoachModule {
        number: "2",
        key: "aggregate",
        title: "聚合与不变式",
        heading: "模块：聚合与不变式",
        paragraphs: &["聚合是事务一致性边界，聚合内部维护不变式，外界不能直接引用其实体。"],
        checklist: &[
            "边界是否明确",
            "不变式是否枚举",
            "是否避免共享实体",
            "允许共享值对象",
        ],
        question: "小测：是否允许跨聚合直接引用实体？(是/否) ",
        reference_answer: "参考答案：否。跨聚合不能直接或间接引用实体。",
        accepts: accepts_negative,
    },
    CoachModule {
        number: "3",
        key: "cqrs",
        title: "命令与查询",
        heading: "模块：命令与查询 (CQRS)",
        paragraphs: &["命令用于改变状态（写），查询用于读取信息（读），命名统一用 PascalCase。"],
        checklist: &[],
        question: "小测：创建订单应建模为命令还是查询？ ",
        reference_answer: "参考答案：命令。创建/修改/关闭等写操作映射为命令。",
        accepts: accepts_cqrs,
    },
    CoachModule {
        number: "4",
        key: "events",
        title: "领域事件与处理器",
        heading: "模块：领域事件与处理器",
        paragraphs: &[
            "领域事件由聚合行为产生，订阅方在事件处理器中执行反应式动作，避免跨聚合直接操作。",
        ],
        checklist: &[],
        question: "小测：订单已支付应对应怎样的事件命名？（建议过去式） ",
        reference_answer: "参考答案：例如 OrderPaid。领域事件命名用过去式。",
        accepts: accepts_events,
    },
    CoachModule {
        number: "5",
        key: "endpoint",
        title: "Endpoint 与一致性",
        heading: "模块：Endpoint 与一致性",
        paragraphs: &[
            "为外部交互设计清晰的 Endpoint：标明方法、鉴权、幂等；绑定命令或查询；必要时说明一致性策略。",
        ],
        checklist: &[],
        question: "小测：幂等的接口在重复提交时应该返回什么效果？ ",
        reference_answer: "参考答案：返回相同结果或不产生额外副作用。",
        accepts: accepts_endpoint,
    },
    CoachModule {
        number: "6",
        key: "antipatterns",
        title: "反模式辨析",
        heading: "模块：反模式辨析",
        paragraphs: &[
            "常见反模式：跨聚合引用、共享实体、事务跨越多个聚合、贫血模型、过度共享数据库表等。",
        ],
        checklist: &[],
        question: "小测：共享实体在 CleanDDD 中是否允许？(是/否) ",
        reference_answer: "参考答案：否。只允许共享值对象。",
        accepts: accepts_negative,
    },
];

// ── Acceptance predicates ────────────────────────────────────────────────────

fn accepts_overview(answer: &str) -> bool {
    answer.contains("事件") || answer.contains("领域事件") || answer.to_lowercase().contains("event")
}

/// Yes/no questions whose expected answer is "no": exact tokens only.
fn accepts_negative(answer: &str) -> bool {
    matches!(answer, "否" | "no" | "No" | "NO")
}

fn accepts_cqrs(answer: &str) -> bool {
    answer.contains("命令") || answer.to_lowercase().contains("command")
}

fn accepts_events(answer: &str) -> bool {
    ["已支付", "Paid", "支付完成", "OrderPaid"]
        .iter()
        .any(|needle| answer.contains(needle))
}

fn accepts_endpoint(answer: &str) -> bool {
    answer.contains("相同结果")
        || answer.contains("无副作用")
        || answer.to_lowercase().contains("idempotent")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(key: &str) -> &'static CoachModule {
        CoachModule::by_key(key).unwrap()
    }

    #[test]
    fn table_is_in_canonical_order() {
        let numbers: Vec<_> = MODULES.iter().map(|m| m.number).collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6"]);
        let keys: Vec<_> = MODULES.iter().map(|m| m.key).collect();
        assert_eq!(
            keys,
            vec!["overview", "aggregate", "cqrs", "events", "endpoint", "antipatterns"]
        );
    }

    #[test]
    fn overview_accepts_event_in_any_latin_case() {
        let m = module("overview");
        assert!(m.accepts("通过领域事件"));
        assert!(m.accepts("Domain EVENTS"));
        assert!(!m.accepts("直接调用"));
    }

    #[test]
    fn aggregate_requires_exact_negative_token() {
        let m = module("aggregate");
        for answer in ["否", "no", "No", "NO"] {
            assert!(m.accepts(answer), "answer: {answer}");
        }
        for answer in ["是", "nO", "no way", " 否"] {
            assert!(!m.accepts(answer), "answer: {answer}");
        }
    }

    #[test]
    fn cqrs_substring_match_is_lenient() {
        let m = module("cqrs");
        assert!(m.accepts("命令"));
        assert!(m.accepts("a Command"));
        // Substring match: negations still count.
        assert!(m.accepts("不是命令"));
        assert!(!m.accepts("查询"));
    }

    #[test]
    fn events_match_is_case_sensitive() {
        let m = module("events");
        assert!(m.accepts("OrderPaid"));
        assert!(m.accepts("订单已支付"));
        assert!(m.accepts("支付完成事件"));
        assert!(!m.accepts("orderpaid"));
    }

    #[test]
    fn endpoint_accepts_idempotent_any_case() {
        let m = module("endpoint");
        assert!(m.accepts("IDEMPOTENT"));
        assert!(m.accepts("返回相同结果"));
        assert!(m.accepts("无副作用"));
        assert!(!m.accepts("报错"));
    }

    #[test]
    fn antipatterns_shares_negative_predicate() {
        let m = module("antipatterns");
        assert!(m.accepts("否"));
        assert!(!m.accepts("是"));
    }

    #[test]
    fn predicates_are_deterministic() {
        let answers = ["否", "命令", "OrderPaid", "idempotent", "event", "", "随便"];
        for m in &MODULES {
            for answer in answers {
                assert_eq!(m.accepts(answer), m.accepts(answer), "{} / {answer}", m.key);
            }
        }
    }
}
