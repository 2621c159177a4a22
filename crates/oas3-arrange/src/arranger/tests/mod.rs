
use serde_json::Value;

pub(crate) fn yaml(text: &str) -> Value {
  serde_yaml::from_str(text).expect("fixture should parse")
}

/// A schema collection exercising every extraction rule: loners, simple
/// property references, an allOf/anyOf pair, a 3-cycle, and a 6-cycle
/// declared out of numeric order. References are written as bare names.
pub(crate) const SPEC_DOC: &str = "
components:
  schemas:
    Solo:
      foo: bar
    RefSolo:
      properties:
        foo:
          $ref: Solo
    Second:
      type: something
      properties:
        foo:
          $ref: Solo
    LoopA:
      allOf:
      - $ref: Second
      - $ref: LoopB
    LoopB:
      anyOf:
      - $ref: LoopA
      - $ref: Solo
    LoopC:
      properties:
        foo:
          $ref: LoopD
    LoopD:
      properties:
        foo:
          $ref: LoopE
    LoopE:
      properties:
        foo:
          $ref: LoopC
    Loop1:
      properties:
        foo:
          $ref: Loop2
    Loop6:
      properties:
        foo:
          $ref: Loop1
    Loop2:
      properties:
        foo:
          $ref: Loop3
    Loop5:
      properties:
        foo:
          $ref: Loop6
    Loop3:
      properties:
        foo:
          $ref: Loop4
    Loop4:
      properties:
        foo:
          $ref: Loop5
";

/// Same collection with reference targets outside the container (prefixed
/// `r`), so the greedy ordering is decided purely by each schema's own
/// reference counts.
pub(crate) const PREFIXED_DOC: &str = "
components:
  schemas:
    Solo:
      foo: bar
    RefSolo:
      properties:
        foo:
          $ref: rSolo
    Second:
      type: something
      properties:
        foo:
          $ref: rSolo
    LoopA:
      allOf:
      - $ref: rSecond
      - $ref: rLoopB
    LoopB:
      anyOf:
      - $ref: rLoopA
      - $ref: rSolo
    LoopC:
      properties:
        foo:
          $ref: rLoopD
    LoopD:
      properties:
        foo:
          $ref: rLoopE
    LoopE:
      properties:
        foo:
          $ref: rLoopC
    Loop1:
      properties:
        foo:
          $ref: rLoop2
    Loop6:
      properties:
        foo:
          $ref: rLoop1
    Loop2:
      properties:
        foo:
          $ref: rLoop3
    Loop5:
      properties:
        foo:
          $ref: rLoop6
    Loop3:
      properties:
        foo:
          $ref: rLoop4
    Loop4:
      properties:
        foo:
          $ref: rLoop5
";
