mod harness;

use harness::assert_round_trip;
use test_case::test_case;

#[test_case(""; "empty input")]
#[test_case("return 1"; "simple return")]
#[test_case("return"; "bare return")]
#[test_case("break"; "bare break")]
#[test_case("continue"; "bare continue")]
#[test_case("return 1, 2, 3"; "return list")]
#[test_case("local x = 1"; "local")]
#[test_case("local x"; "local without value")]
#[test_case("local x, y = 1, 2"; "local list")]
#[test_case("local x = 1;"; "trailing semicolon")]
#[test_case("x = 1"; "assignment")]
#[test_case("a, b.c, d[1] = 1, 2, 3"; "multi assignment")]
#[test_case("x += y"; "compound add")]
#[test_case("s ..= tail"; "compound concat")]
#[test_case("n //= 2"; "compound floor division")]
#[test_case("print(1)"; "call statement")]
#[test_case("a.b:c(1)(2)"; "chained calls")]
#[test_case("print \"hello\""; "string call shorthand")]
#[test_case("print [[hello]]"; "long string call shorthand")]
#[test_case("setmetatable(t, { __index = base })"; "table call argument")]
#[test_case("f{ 1, 2 }"; "table call shorthand")]
#[test_case("(f)(x)"; "parenthesized callee")]
#[test_case("do end"; "empty do")]
#[test_case("do local x = 1 end"; "do block")]
#[test_case("while true do break end"; "while loop")]
#[test_case("repeat x = x - 1 until x == 0"; "repeat")]
#[test_case("if a then b() end"; "if statement")]
#[test_case("if a then b() elseif c then d() else e() end"; "if chain")]
#[test_case("for i = 1, 10 do end"; "numeric for")]
#[test_case("for i = 1, 10, 2 do print(i) end"; "numeric for with step")]
#[test_case("for k, v in pairs(t) do print(k, v) end"; "generic for")]
#[test_case("for i: number = 1, 10 do end"; "annotated numeric for")]
#[test_case("function f() end"; "function stat")]
#[test_case("function M.a.b:method(self) end"; "dotted method name")]
#[test_case("local function helper(a, b) return a + b end"; "local function")]
#[test_case("local f = function(...) return ... end"; "function expr with varargs")]
#[test_case("@native function hot() end"; "attribute on function")]
#[test_case("@checked local function f() end"; "attribute on local function")]
#[test_case("local f = @native function() end"; "attribute on function expr")]
#[test_case("function f<T>(x: T): T return x end"; "generic function")]
#[test_case("function f(...: number) end"; "typed varargs")]
#[test_case("function f(...: T...) end"; "generic pack varargs")]
#[test_case("local x = if c then 1 else 2"; "if expression")]
#[test_case("local x = if a then 1 elseif b then 2 else 3"; "if expression chain")]
#[test_case("local t = {}"; "empty table")]
#[test_case("local t = { 1, 2; 3, }"; "table with mixed separators")]
#[test_case("local t = { a = 1, [\"b\"] = 2, [3] = 4 }"; "table key shapes")]
#[test_case("local s = 'single' .. \"double\""; "string quotes")]
#[test_case("local s = \"esc \\n \\x41 \\u{1F600} \\065 \\z\n  ok\""; "string escapes")]
#[test_case("local s = [[long\nstring]]"; "long string")]
#[test_case("local s = [==[nested ]] still going]==]"; "leveled long string")]
#[test_case("local n = 0xFF_00 + 0b1010 + 1_000_000 + 1.5e-3 + .5"; "number shapes")]
#[test_case("local ok = not a and #b or -c + +d"; "unary operators")]
#[test_case("local p = -2 ^ 2 ^ 3"; "right associative power")]
#[test_case("local s = \"a\" .. \"b\" .. \"c\""; "right associative concat")]
#[test_case("local x = (1 + 2) * 3 // 4 % 5"; "arithmetic grouping")]
#[test_case("local ok = a <= b and c ~= d"; "comparisons")]
#[test_case("local v = x :: number"; "type assertion")]
#[test_case("local v = -x :: number"; "assertion binds before unary")]
#[test_case("local s = `plain`"; "simple interpolated string")]
#[test_case("local s = `hi {name}!`"; "interpolated string")]
#[test_case("local s = `a {1 + 2} b {f({})} c`"; "interpolated string with braces")]
#[test_case("local s = `outer {`inner {x}`}`"; "nested interpolated string")]
#[test_case("local x: number = 1"; "type annotation")]
#[test_case("local x: Foo.Bar = y"; "prefixed type")]
#[test_case("local x: Array<number> = y"; "generic type")]
#[test_case("local x: {number} = y"; "array type")]
#[test_case("local x: {a: number, [string]: boolean} = t"; "table type")]
#[test_case("local x: { read a: number, write [string]: boolean } = t"; "table type access")]
#[test_case("local x: { [\"key\"]: number } = t"; "string prop type")]
#[test_case("local x: (number, string) -> boolean = f"; "function type")]
#[test_case("local x: (a: number, b: string) -> () = f"; "named function type params")]
#[test_case("local x: <T>(T) -> T = id"; "generic function type")]
#[test_case("local x: (number) -> (string, ...number) = f"; "variadic return pack")]
#[test_case("local x: typeof(someValue) = y"; "typeof type")]
#[test_case("local x: number? = nil"; "optional type")]
#[test_case("local x: number?? = nil"; "double optional type")]
#[test_case("local x: number | string | nil = v"; "union type")]
#[test_case("local x: | number | string = v"; "leading pipe union")]
#[test_case("local x: & {} & {} = v"; "leading amp intersection")]
#[test_case("local x: A & B | C = v"; "mixed union intersection")]
#[test_case("local x: (A | B) & C = v"; "grouped union in intersection")]
#[test_case("local x: \"literal\" | true | false | nil = v"; "singleton types")]
#[test_case("type Id = number"; "type alias")]
#[test_case("export type Pair<K, V> = { first: K, second: V }"; "export alias with generics")]
#[test_case("type Callback<A..., R...> = (A...) -> R..."; "generic pack alias")]
#[test_case("type WithDefault<T = string> = { value: T }"; "defaulted generic")]
#[test_case("type F<T, U... = (string)> = (T) -> U..."; "defaulted pack")]
#[test_case("local type = 1"; "contextual keyword as name")]
#[test_case("export = nil"; "export as name")]
#[test_case("continue(1)"; "continue as call")]
#[test_case("typeof(x)"; "typeof as plain call")]
#[test_case("type(x)"; "type as plain call")]
fn round_trips(source: &str) {
    assert_round_trip(source);
}

#[test]
fn round_trips_trivia_heavy_source() {
    assert_round_trip("#!/usr/bin/env luau\n-- leading comment\nlocal x\t=  1 --[[ inline ]] + 2\n\n--[==[\nblock\n]==]\nreturn x -- trailing\n");
}

#[test]
fn round_trips_a_module() {
    assert_round_trip(
        r#"--!strict
local Queue = {}
Queue.__index = Queue

export type Queue<T> = typeof(setmetatable(
    {} :: { items: { T }, first: number, last: number },
    Queue
))

function Queue.new<T>(): Queue<T>
    local self = { items = {}, first = 1, last = 0 }
    return setmetatable(self, Queue)
end

function Queue:push<T>(value: T)
    self.last += 1
    self.items[self.last] = value
end

function Queue:pop<T>(): T?
    if self.first > self.last then
        return nil
    end
    local value = self.items[self.first]
    self.items[self.first] = nil
    self.first += 1
    return value
end

return Queue
"#,
    );
}

/// Trivia and token spans exactly partition the input: no gaps, no overlap.
#[test]
fn trivia_partitions_the_source() {
    let sources = [
        "",
        "  \t\n",
        "-- only a comment",
        "#!/usr/bin/env luau\nlocal x = 1 -- note\n--[[ done ]]",
        "local s = `a {1} b` + [[x]]",
    ];
    for source in sources {
        let tokens = luau_parser::tokenize(source).unwrap();
        let mut position = 0;
        for token in &tokens {
            for trivia in token.trivia() {
                assert_eq!(trivia.span().start, position, "gap before trivia in {source:?}");
                position = trivia.span().end;
            }
            assert_eq!(token.span().start, position, "gap before token in {source:?}");
            position = token.span().end;
        }
        assert_eq!(position as usize, source.len(), "uncovered tail in {source:?}");
    }
}

/// Parsing is a pure function of the input.
#[test]
fn parsing_is_deterministic() {
    let source = "local x: { a: number } = f(`v {x}`)";
    assert_eq!(luau_parser::parse(source), luau_parser::parse(source));
}
