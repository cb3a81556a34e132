//! Fixed text blocks of the instructions file, keyed by section and locale.

use crate::locale::Locale;
use crate::options::{Editor, Language};

/// Sections whose text depends on the locale only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Heading,
    Introduction,
    TopRules,
    LanguageAndComments,
    Workflow,
    DocsRules,
    DesignRules,
    Testing,
    Examples,
}

/// Order of the sections that precede the language and editor blocks
pub const LEADING_SECTIONS: [Section; 8] = [
    Section::Heading,
    Section::Introduction,
    Section::TopRules,
    Section::LanguageAndComments,
    Section::Workflow,
    Section::DocsRules,
    Section::DesignRules,
    Section::Testing,
];

/// Sections rendered after the language and editor blocks
pub const TRAILING_SECTIONS: [Section; 1] = [Section::Examples];

pub fn section_text(section: Section, locale: Locale) -> &'static str {
    match (section, locale) {
        (Section::Heading, Locale::En) => HEADING_EN,
        (Section::Heading, Locale::Ja) => HEADING_JA,
        (Section::Introduction, Locale::En) => INTRO_EN,
        (Section::Introduction, Locale::Ja) => INTRO_JA,
        (Section::TopRules, Locale::En) => TOP_RULES_EN,
        (Section::TopRules, Locale::Ja) => TOP_RULES_JA,
        (Section::LanguageAndComments, Locale::En) => LANGUAGE_COMMENTS_EN,
        (Section::LanguageAndComments, Locale::Ja) => LANGUAGE_COMMENTS_JA,
        (Section::Workflow, Locale::En) => WORKFLOW_EN,
        (Section::Workflow, Locale::Ja) => WORKFLOW_JA,
        (Section::DocsRules, Locale::En) => DOCS_RULES_EN,
        (Section::DocsRules, Locale::Ja) => DOCS_RULES_JA,
        (Section::DesignRules, Locale::En) => DESIGN_RULES_EN,
        (Section::DesignRules, Locale::Ja) => DESIGN_RULES_JA,
        (Section::Testing, Locale::En) => TESTING_EN,
        (Section::Testing, Locale::Ja) => TESTING_JA,
        (Section::Examples, Locale::En) => EXAMPLES_EN,
        (Section::Examples, Locale::Ja) => EXAMPLES_JA,
    }
}

/// Heading line of the per-language block
pub fn language_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "## Language Guidance",
        Locale::Ja => "## 言語別指針",
    }
}

/// Toolchain advice for one target language
pub fn language_guidance(language: Language, locale: Locale) -> &'static str {
    match (language, locale) {
        (Language::Python, Locale::En) => {
            "- Python: recommend `uv` + `.venv`, `pytest`, lint/format (`ruff`/`black`)."
        }
        (Language::Python, Locale::Ja) => {
            "- Python: `uv` + `.venv` 仮想環境、`pytest`、Lint/Format（`ruff`/`black` など）を推奨。"
        }
        (Language::Js, Locale::En) => {
            "- JavaScript: Node.js + `pnpm`/`npm`, testing (Vitest/Jest), lint/format (ESLint/Prettier)."
        }
        (Language::Js, Locale::Ja) => {
            "- JavaScript: Node.js + `pnpm`/`npm`、テスト（Vitest/Jest）、Lint/Format（ESLint/Prettier）。"
        }
        (Language::Ts, Locale::En) => {
            "- TypeScript: as JS + `tsc --noEmit` for type checking; favor DI through abstract interfaces."
        }
        (Language::Ts, Locale::Ja) => {
            "- TypeScript: JS と同様 + `tsc --noEmit` で型チェック。抽象インターフェース経由の DI を推奨。"
        }
        (Language::Rust, Locale::En) => {
            "- Rust: recommend a `cargo` workspace, `cargo fmt` / `cargo clippy` / `cargo test`; include feature-flag guidance and real-device testing."
        }
        (Language::Rust, Locale::Ja) => {
            "- Rust: `cargo` ワークスペース推奨、`cargo fmt` / `cargo clippy` / `cargo test`、feature flag と実機テスト導線を含める。"
        }
    }
}

/// Environment-variable note appended to every language block
pub fn env_note(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "- Call out required env vars/`.env` keys and where they are used; do not generate `.env.sample`."
        }
        Locale::Ja => {
            "- 環境変数/`.env` の必要キーと利用箇所を明示し、`.env.sample` は生成しないでください。"
        }
    }
}

/// Heading line of the per-editor block
pub fn editor_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "## Target Editor",
        Locale::Ja => "## 対応エディタ",
    }
}

/// Label preceding the editor's display name
pub fn editor_target_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "- Target: ",
        Locale::Ja => "- ターゲット: ",
    }
}

/// Where the editor expects the instructions file and skills
pub fn editor_placement(editor: Editor, locale: Locale) -> &'static str {
    match (editor, locale) {
        (Editor::Codex, Locale::En) => {
            "- Codex reads `AGENTS.md` from the repository root; nested `AGENTS.md` files refine rules per directory.\n- Skills are installed under `.codex/skills`."
        }
        (Editor::Codex, Locale::Ja) => {
            "- Codex はリポジトリ直下の `AGENTS.md` を読み込みます。サブディレクトリの `AGENTS.md` で規則を上書きできます。\n- スキルは `.codex/skills` に配置されます。"
        }
        (Editor::Cursor, Locale::En) => {
            "- Cursor reads `.cursorrules` from the project root; for scoped rules use `.cursor/rules`.\n- Skills are installed under `.cursor/skills`."
        }
        (Editor::Cursor, Locale::Ja) => {
            "- Cursor はプロジェクト直下の `.cursorrules` を読み込みます。範囲を限定する規則は `.cursor/rules` に置いてください。\n- スキルは `.cursor/skills` に配置されます。"
        }
        (Editor::ClaudeCode, Locale::En) => {
            "- Claude Code reads `CLAUDE.md`; link it to this file (`ln -s AGENTS.md CLAUDE.md`) so both stay in sync.\n- Skills are installed under `.claude/skills`."
        }
        (Editor::ClaudeCode, Locale::Ja) => {
            "- Claude Code は `CLAUDE.md` を読み込みます。`ln -s AGENTS.md CLAUDE.md` でこのファイルにリンクしてください。\n- スキルは `.claude/skills` に配置されます。"
        }
        (Editor::Copilot, Locale::En) => {
            "- GitHub Copilot reads `.github/copilot-instructions.md`; move this file there once reviewed.\n- Skills are installed under `.github/skills`."
        }
        (Editor::Copilot, Locale::Ja) => {
            "- GitHub Copilot は `.github/copilot-instructions.md` を読み込みます。内容を確認したらこのファイルを移動してください。\n- スキルは `.github/skills` に配置されます。"
        }
    }
}

/// Closing line of the per-editor block
pub fn editor_switch_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "- Use `--editor` to generate for another editor",
        Locale::Ja => "- 他のエディタ向けに生成する場合は CLI オプション `--editor` を使用",
    }
}

const HEADING_EN: &str = "# AGENTS (Shared Template)";

const HEADING_JA: &str = "# AGENTS（共通テンプレート）";

const INTRO_EN: &str = "This file holds project-agnostic operating rules for AI coding agents.
Keep project-specific details in `docs/` and start from `docs/OVERVIEW.md`, which links `docs/concept.md`, `docs/spec.md`, `docs/architecture.md`, and `docs/plan.md`.
If any of them is missing, create it before writing code. Never put secrets in this file.";

const INTRO_JA: &str = "このファイルは AI コーディングエージェント向けの共通ルールです。プロジェクト固有の情報は書きません。
プロジェクト固有の情報は `docs/` で管理し、まず `docs/OVERVIEW.md` から `docs/concept.md`, `docs/spec.md`, `docs/architecture.md`, `docs/plan.md` を辿ってください。
該当ドキュメントが無い場合はコードを書く前に作成してください。機密情報は記載しないでください。";

const TOP_RULES_EN: &str = "## Top 5 (Must Follow)
1. Read `docs/OVERVIEW.md` and the docs it links before any change.
2. Track every task in the `docs/plan.md` checklist and tick items as you finish them.
3. Work in order: requirements → spec → design → implementation → tests.
4. No god APIs, god classes, or god data; keep single responsibility and small interfaces.
5. A feature is done only when its tests pass on the real path, not just with mocks.";

const TOP_RULES_JA: &str = "## Top 5（必ず守る）
1. 変更前に `docs/OVERVIEW.md` とリンク先のドキュメントを読む
2. すべての作業を `docs/plan.md` のチェックリストで管理し、完了したらチェックする
3. 要件定義 → 仕様 → 設計 → 実装 → テストの順に進める
4. ゴッドAPI・ゴッドクラス・ゴッドデータを作らず、単一責務と小さなインターフェースを守る
5. モックだけでなく本番経路でテストが通って初めて完了とする";

const LANGUAGE_COMMENTS_EN: &str = "## Language & Comments
- Write docs, comments, and commit messages in English.
- Comments state intent and constraints the code cannot show.
- Public functions and types get a short doc comment.";

const LANGUAGE_COMMENTS_JA: &str = "## 言語・コメント
- ドキュメントは日本語で記述する
- コードコメントは日本語 + 英語を併記する（例: `// 設定を読み込む / Load settings`）
- コメントにはコードから読み取れない意図・制約を書く
- 公開関数・型には短い説明コメントを付ける";

const WORKFLOW_EN: &str = "## How to Work
### Start of work
1. Read `docs/OVERVIEW.md`, then `docs/concept.md`, `docs/spec.md`, `docs/architecture.md` (create them if missing).
2. Add the task to the `docs/plan.md` checklist.
### During work
- Proceed Requirements → Specs → Design → Implementation → Tests.
- Tick checklist items in `docs/plan.md` as they are completed.
- Update the docs in the same change as the code they describe.";

const WORKFLOW_JA: &str = "## 作業の進め方
### 作業開始時
1. `docs/OVERVIEW.md` を読み、続いて `docs/concept.md`, `docs/spec.md`, `docs/architecture.md` を読む（無ければ作成する）
2. `docs/plan.md` のチェックリストに作業を追加する
### 作業中
- 要件定義 → 仕様 → 設計 → 実装 → テストの順に進める
- 完了した項目は `docs/plan.md` でチェックする
- コードの変更と同じ作業内で対応するドキュメントも更新する";

const DOCS_RULES_EN: &str = "## Docs Rules
- `docs/concept.md`: target users, their pain points, required use cases/features, chosen libraries.
- `docs/spec.md`: behaviour written in Given/When/Then form.
- `docs/architecture.md`: layers, module boundaries, and the env vars each part reads.
- `docs/plan.md`: the checklist of work in progress.";

const DOCS_RULES_JA: &str = "## ドキュメント規約
- `docs/concept.md`: 想定ユーザーと困りごと、必要なユースケース/機能一覧、使用するライブラリ
- `docs/spec.md`: 仕様/要求仕様は 前提/条件/振る舞い（Given/When/Then）で記載する
- `docs/architecture.md`: レイヤー構造、モジュール境界、各部が参照する環境変数
- `docs/plan.md`: 進行中の作業チェックリスト";

const DESIGN_RULES_EN: &str = "## Design Rules
- Keep layered architecture and single responsibility.
- Define boundaries with abstract interfaces for easy DI.
- Avoid god APIs, god classes, god data, and grab-bag helpers; expose simple interfaces.
- Pass configuration in explicitly instead of reading global state deep in the code.";

const DESIGN_RULES_JA: &str = "## 設計ルール
- レイヤー構造と単一責務を徹底する
- 抽象インターフェースで境界を定義し、DI しやすくする
- ゴッドAPI・ゴッドクラス・ゴッドデータや雑多なヘルパーは作らず、シンプルなインターフェースを提供する
- グローバル状態を奥深くで読まず、設定は明示的に渡す";

const TESTING_EN: &str = "## Testing
- Finish tests per feature/layer.
- Mocks are auxiliary; completion requires real calls/real connections.
- List required env vars, connection info, and `.env` placement/examples in `docs/architecture.md` (do not generate `.env.sample`).
- Add step-wise debug logging when tests get stuck.";

const TESTING_JA: &str = "## テスト方針
- 機能/レイヤー単位でテストを完成させる
- モックは補助。本番経路（実通信・実接続）が通ったときに完了扱い
- 必要な環境変数・接続情報・`.env` の配置場所と設定例は `docs/architecture.md` に記載する（`.env.sample` は生成しない）
- テストが難航したらステップごとにデバッグメッセージを追加する";

const EXAMPLES_EN: &str = "## Minimal Examples
- Spec entry in `docs/spec.md`:
  - Given a registered user
  - When they sign in with a wrong password
  - Then the API returns 401 and no session is created
- Checklist in `docs/plan.md`:
  - [x] Write docs/concept.md
  - [ ] Specify sign-in in docs/spec.md
  - [ ] Implement and test sign-in";

const EXAMPLES_JA: &str = "## サンプル（最低限）
- `docs/spec.md` の仕様記述:
  - 前提: 登録済みユーザーがいる
  - 条件: 誤ったパスワードでサインインする
  - 振る舞い: API は 401 を返し、セッションは作成されない
- `docs/plan.md` のチェックリスト:
  - [x] docs/concept.md を書く
  - [ ] docs/spec.md にサインインの仕様を書く
  - [ ] サインインを実装してテストする";
