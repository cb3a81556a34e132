//! Skeleton documents created under `docs/`.

use crate::constants::{DOC_ARCHITECTURE, DOC_CONCEPT, DOC_OVERVIEW, DOC_PLAN, DOC_SPEC};
use crate::locale::Locale;

/// Stub file names in the order they are created
pub const DOC_STUBS: [&str; 5] = [
    DOC_OVERVIEW,
    DOC_CONCEPT,
    DOC_SPEC,
    DOC_ARCHITECTURE,
    DOC_PLAN,
];

/// Returns the stub content for `name`, or `None` for an unknown stub
pub fn doc_stub(name: &str, locale: Locale) -> Option<&'static str> {
    let text = match (name, locale) {
        (DOC_OVERVIEW, Locale::En) => OVERVIEW_EN,
        (DOC_OVERVIEW, Locale::Ja) => OVERVIEW_JA,
        (DOC_CONCEPT, Locale::En) => CONCEPT_EN,
        (DOC_CONCEPT, Locale::Ja) => CONCEPT_JA,
        (DOC_SPEC, Locale::En) => SPEC_EN,
        (DOC_SPEC, Locale::Ja) => SPEC_JA,
        (DOC_ARCHITECTURE, Locale::En) => ARCHITECTURE_EN,
        (DOC_ARCHITECTURE, Locale::Ja) => ARCHITECTURE_JA,
        (DOC_PLAN, Locale::En) => PLAN_EN,
        (DOC_PLAN, Locale::Ja) => PLAN_JA,
        _ => return None,
    };
    Some(text)
}

const OVERVIEW_EN: &str = "# Project Overview

Start here. This index links the documents to read before changing code.

| Document | Purpose |
|---|---|
| [concept.md](concept.md) | Why the project exists, target users, use cases |
| [spec.md](spec.md) | Behaviour written as Given/When/Then |
| [architecture.md](architecture.md) | Layers, boundaries, libraries, env vars |
| [plan.md](plan.md) | Checklist of work in progress |

## Summary

- What:
- For whom:
- Status:
";

const OVERVIEW_JA: &str = "# プロジェクト概要

最初に読むドキュメントです。コードを変更する前に以下を参照してください。

| ドキュメント | 内容 |
|---|---|
| [concept.md](concept.md) | 目的、想定ユーザー、ユースケース |
| [spec.md](spec.md) | 前提/条件/振る舞いで書いた仕様 |
| [architecture.md](architecture.md) | レイヤー、境界、ライブラリ、環境変数 |
| [plan.md](plan.md) | 進行中の作業チェックリスト |

## 概要

- 何を作るか:
- 誰のためか:
- 状況:
";

const CONCEPT_EN: &str = "# Concept

## Problem

## Target Users

## Use Cases / Features

-

## Libraries

-
";

const CONCEPT_JA: &str = "# コンセプト

## 解決したい課題

## 想定ユーザー

## ユースケース / 機能一覧

-

## 使用するライブラリ

-
";

const SPEC_EN: &str = "# Specification

Write each behaviour as Given/When/Then.

## Feature: <name>

- Given
- When
- Then
";

const SPEC_JA: &str = "# 仕様

各振る舞いを 前提/条件/振る舞い で記述します。

## 機能: <名前>

- 前提:
- 条件:
- 振る舞い:
";

const ARCHITECTURE_EN: &str = "# Architecture

## Overview

## Layers

| Layer | Responsibility |
|---|---|
| | |

## Boundaries & Interfaces

## Environment Variables

| Variable | Used by | Notes |
|---|---|---|
| | | |
";

const ARCHITECTURE_JA: &str = "# アーキテクチャ

## 全体像

## レイヤー

| レイヤー | 責務 |
|---|---|
| | |

## 境界とインターフェース

## 環境変数

| 変数 | 利用箇所 | 備考 |
|---|---|---|
| | | |
";

const PLAN_EN: &str = "# Plan

Tick items as they are completed.

- [ ] Fill in docs/concept.md
- [ ] Write docs/spec.md
- [ ] Write docs/architecture.md
- [ ] Implement
- [ ] Test on the real path
";

const PLAN_JA: &str = "# 計画

完了した項目にチェックを付けてください。

- [ ] docs/concept.md を記入する
- [ ] docs/spec.md を書く
- [ ] docs/architecture.md を書く
- [ ] 実装する
- [ ] 本番経路でテストする
";
