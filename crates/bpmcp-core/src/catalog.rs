//! The fixed catalog of Blueprint editing tools.
//!
//! Each entry maps one tool 1:1 onto an endpoint of the Unreal Engine editor
//! automation server. Mutating endpoints take a JSON body with upper-camel
//! field names; read endpoints take lower-snake query parameters.

use crate::types::{ArgSpec, Encoding, HttpMethod, Inclusion, Operation};

const BP_PATH: ArgSpec = ArgSpec::text(
    "bp_path",
    "BpPath",
    "Must be a valid Blueprint path (e.g., '/Game/Test/MyBlueprint').",
);
const BP_PATH_QUERY: ArgSpec = ArgSpec::text(
    "bp_path",
    "bp_path",
    "Must be a valid Blueprint path (e.g., '/Game/Test/MyBlueprint').",
);
const GRAPH_NAME: ArgSpec = ArgSpec::text(
    "graph_name",
    "GraphName",
    "Must be a valid graph name (e.g., 'EventGraph').",
);
const EXISTING_FUNCTION: ArgSpec = ArgSpec::text(
    "function_name",
    "FunctionName",
    "Must be a valid existing function name (e.g., 'MyFunction').",
);
const EXISTING_VAR: ArgSpec = ArgSpec::text(
    "var_name",
    "VarName",
    "Must be a valid existing variable name (e.g., 'NewVar').",
);
const EXISTING_COMPONENT: ArgSpec = ArgSpec::text(
    "component_name",
    "ComponentName",
    "Must be a valid existing component name (e.g., 'MyStaticMeshComp').",
);

const PIN_LINK_ARGS: &[ArgSpec] = &[
    BP_PATH,
    GRAPH_NAME,
    ArgSpec::text(
        "output_node_id",
        "OutputNodeId",
        "Must be a valid node ID (e.g., '7C40B46046D4D873D5DF9C89D957426E').",
    ),
    ArgSpec::text(
        "output_pin_name",
        "OutputPinName",
        "Must be a valid pin name on the output node (e.g., 'NewVar5').",
    ),
    ArgSpec::text(
        "input_node_id",
        "InputNodeId",
        "Must be a valid node ID (e.g., '2AFEFE7B4F381FCD206A47903659176F').",
    ),
    ArgSpec::text(
        "input_pin_name",
        "InputPinName",
        "Must be a valid pin name on the input node (e.g., 'TargetRelativeLocation').",
    ),
];

const fn post(
    name: &'static str,
    path: &'static str,
    description: &'static str,
    args: &'static [ArgSpec],
) -> Operation {
    Operation {
        name,
        path,
        method: HttpMethod::Post,
        encoding: Encoding::JsonBody,
        description,
        args,
    }
}

const fn get(
    name: &'static str,
    path: &'static str,
    description: &'static str,
    args: &'static [ArgSpec],
) -> Operation {
    Operation {
        name,
        path,
        method: HttpMethod::Get,
        encoding: if args.is_empty() {
            Encoding::None
        } else {
            Encoding::Query
        },
        description,
        args,
    }
}

pub static OPERATIONS: &[Operation] = &[
    post(
        "create_blueprint",
        "/create_bp",
        "Create a new Unreal Engine 5 Blueprint.",
        &[
            ArgSpec::text(
                "parent_class",
                "ParentClass",
                "Must be a valid Unreal Engine class name (e.g., 'Actor').",
            ),
            BP_PATH,
        ],
    ),
    post(
        "create_function",
        "/create_function",
        "Create a new function in the Blueprint.",
        &[
            BP_PATH,
            ArgSpec::text(
                "function_name",
                "FunctionName",
                "Must be a valid function name (e.g., 'MyFunction').",
            ),
            ArgSpec::text(
                "input_signature",
                "FunctionInputSignature",
                "Must be a valid input signature string (e.g., 'int32 Input1, float Input2').",
            ),
            ArgSpec::text(
                "output_signature",
                "FunctionOutputSignature",
                "Must be a valid output signature string (e.g., 'bool Output').",
            ),
        ],
    ),
    post(
        "edit_function",
        "/edit_function",
        "Edit an existing function in the Blueprint.",
        &[
            BP_PATH,
            EXISTING_FUNCTION,
            ArgSpec::text(
                "input_signature",
                "FunctionInputSignature",
                "Must be a valid new input signature string (e.g., 'int32 NewInput, float Input2, FString ExtraInput').",
            ),
            ArgSpec::text(
                "output_signature",
                "FunctionOutputSignature",
                "Must be a valid new output signature string (e.g., 'bool NewOutput, float ExtraOutput').",
            ),
        ],
    ),
    post(
        "delete_function",
        "/delete_function",
        "Delete a function from the Blueprint.",
        &[BP_PATH, EXISTING_FUNCTION],
    ),
    post(
        "add_function_call_to_graph",
        "/add_function_call_to_graph",
        "Add a function call node to the specified graph in the Blueprint.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "function_name",
                "FunctionName",
                "Must be a valid function name, either defined in this Blueprint or on class_to_call (e.g., 'MyFunction' or 'PrintString').",
            ),
            ArgSpec::optional_text(
                "class_to_call",
                "ClassToCall",
                "Optional class owning the function (e.g., 'KismetSystemLibrary'). Leave empty for functions of this Blueprint.",
            ),
        ],
    ),
    post(
        "add_event_to_graph",
        "/add_event_to_graph",
        "Add an event (custom or built-in) to the specified graph in the Blueprint.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "event_name",
                "EventName",
                "Must be a valid event name (e.g., 'MyEvent' for custom, 'ReceiveHit' for built-in).",
            ),
            ArgSpec::optional_flag(
                "is_custom",
                "bIsCustomEvent",
                "Set to true for custom events, false for built-in events.",
            ),
            ArgSpec::optional_text(
                "event_signature",
                "EventSignature",
                "Required only for custom events, must be a valid signature (e.g., 'int32 Param1, float Param2').",
            )
            .included(Inclusion::WhenFlagSet("is_custom")),
        ],
    ),
    post(
        "add_variable_to_graph",
        "/add_variable_to_graph",
        "Add a variable node (setter or getter) to the specified graph in the Blueprint.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "var_name",
                "VarName",
                "Must be a valid variable name (e.g., 'Test' or 'DefaultSceneRoot').",
            ),
            ArgSpec::flag(
                "is_setter",
                "bIsSetter",
                "Set to true for a setter node, false for a getter node.",
            ),
        ],
    ),
    get(
        "get_blueprint_variables",
        "/get_blueprint_variables",
        "Get the list of variables in the Blueprint.",
        &[
            BP_PATH_QUERY,
            ArgSpec::optional_flag(
                "include_all",
                "include_all",
                "Set to true to also list inherited and engine-generated variables.",
            )
            .included(Inclusion::WhenTrue),
        ],
    ),
    get(
        "get_blueprint_functions",
        "/get_blueprint_functions",
        "Get the list of functions in the Blueprint.",
        &[BP_PATH_QUERY],
    ),
    get(
        "get_graph",
        "/get_graph",
        "Get the details of a specific graph in the Blueprint.",
        &[
            BP_PATH_QUERY,
            ArgSpec::text(
                "graph_name",
                "graph_name",
                "Must be a valid graph name (e.g., 'EventGraph').",
            ),
        ],
    ),
    Operation {
        name: "compile_blueprint",
        path: "/compile_blueprint",
        method: HttpMethod::Post,
        encoding: Encoding::Query,
        description: "Compile the Blueprint.",
        args: &[BP_PATH_QUERY],
    },
    get(
        "get_supported_nodes",
        "/get_supported_nodes",
        "Get the list of supported nodes for the Blueprint system.",
        &[],
    ),
    post(
        "add_variable_to_bp",
        "/add_variable_to_bp",
        "Add a new variable to the Blueprint.",
        &[
            BP_PATH,
            ArgSpec::text(
                "var_signature",
                "VarSignature",
                "Must be a valid variable signature (e.g., 'float NewVar99').",
            ),
        ],
    ),
    post(
        "delete_variable_from_bp",
        "/delete_variable_from_bp",
        "Delete a variable from the Blueprint.",
        &[BP_PATH, EXISTING_VAR],
    ),
    post(
        "rename_variable_in_bp",
        "/rename_variable_in_bp",
        "Rename a variable in the Blueprint.",
        &[
            BP_PATH,
            ArgSpec::text(
                "old_var_name",
                "OldVarName",
                "Must be a valid existing variable name (e.g., 'NewVar2').",
            ),
            ArgSpec::text(
                "new_var_name",
                "NewVarName",
                "Must be a valid new variable name (e.g., 'RenamedVar').",
            ),
        ],
    ),
    post(
        "set_variable_default_value_in_bp",
        "/set_variable_default_value_in_bp",
        "Set the default value for a variable in the Blueprint.",
        &[
            BP_PATH,
            EXISTING_VAR,
            ArgSpec::text(
                "default_value",
                "DefaultValue",
                "Must be a valid default value string for the variable type (e.g., '3.14159').",
            ),
        ],
    ),
    post(
        "connect_pins",
        "/connect_pins",
        "Connect pins between nodes in the specified graph.",
        PIN_LINK_ARGS,
    ),
    post(
        "break_pin_connection",
        "/break_pin_connection",
        "Break the connection between pins in the specified graph.",
        PIN_LINK_ARGS,
    ),
    post(
        "set_pin_default_value",
        "/set_pin_default_value",
        "Set the default value for a pin on a node in the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "node_id",
                "NodeId",
                "Must be a valid node ID (e.g., '2AFEFE7B4F381FCD206A47903659176F').",
            ),
            ArgSpec::text(
                "pin_name",
                "PinName",
                "Must be a valid pin name (e.g., 'TargetRelativeLocation').",
            ),
            ArgSpec::text(
                "default_value",
                "DefaultValue",
                "Must be a valid default value string (e.g., '100, 200, 300').",
            ),
        ],
    ),
    post(
        "add_generic_node_to_graph",
        "/add_generic_node_to_graph",
        "Add a generic node to the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "node_type_name",
                "NodeTypeName",
                "Must be a valid node type name (e.g., 'K2Node_PlayAnimation').",
            ),
        ],
    ),
    post(
        "add_make_struct_node_to_graph",
        "/add_make_struct_node_to_graph",
        "Add a make struct node to the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text("extra_info", "ExtraInfo", "Must be a valid struct type (e.g., 'Vector')."),
        ],
    ),
    post(
        "add_break_struct_node_to_graph",
        "/add_break_struct_node_to_graph",
        "Add a break struct node to the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text("extra_info", "ExtraInfo", "Must be a valid struct type (e.g., 'Vector')."),
        ],
    ),
    post(
        "add_dynamic_cast_node_to_graph",
        "/add_dynamic_cast_node_to_graph",
        "Add a dynamic cast node to the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "extra_info",
                "ExtraInfo",
                "Must be a valid class name for casting (e.g., 'Actor').",
            ),
        ],
    ),
    post(
        "add_class_cast_node_to_graph",
        "/add_class_cast_node_to_graph",
        "Add a class cast node to the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "extra_info",
                "ExtraInfo",
                "Must be a valid class name for casting (e.g., 'Actor').",
            ),
        ],
    ),
    post(
        "add_enum_cast_node_to_graph",
        "/add_enum_cast_node_to_graph",
        "Add an enum cast node to the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "extra_info",
                "ExtraInfo",
                "Must be a valid enum name for casting (e.g., 'EPhysicalSurface').",
            ),
        ],
    ),
    post(
        "add_math_node_to_graph",
        "/add_math_node_to_graph",
        "Add a math node to the specified graph.",
        &[
            BP_PATH,
            GRAPH_NAME,
            ArgSpec::text(
                "function_name",
                "FunctionName",
                "Must be a valid math function name (e.g., 'Add_DoubleDouble').",
            ),
        ],
    ),
    get(
        "get_components_of_bp",
        "/get_components_of_bp",
        "Get the list of components in the Blueprint.",
        &[BP_PATH_QUERY],
    ),
    post(
        "add_component_to_bp",
        "/add_component_to_bp",
        "Add a component to the Blueprint.",
        &[
            BP_PATH,
            ArgSpec::text(
                "component_class",
                "ComponentClass",
                "Must be a valid component class name (e.g., 'StaticMeshComponent').",
            ),
            ArgSpec::text(
                "component_name",
                "ComponentName",
                "Must be a valid component name (e.g., 'MyStaticMeshComp').",
            ),
            ArgSpec::text(
                "attach_to",
                "AttachTo",
                "Must be a valid parent component name (e.g., 'DefaultSceneRoot').",
            ),
        ],
    ),
    post(
        "rename_component_in_bp",
        "/rename_component_in_bp",
        "Rename a component in the Blueprint.",
        &[
            BP_PATH,
            EXISTING_COMPONENT,
            ArgSpec::text(
                "new_component_name",
                "NewComponentName",
                "Must be a valid new component name (e.g., 'RenamedComp').",
            ),
        ],
    ),
    post(
        "remove_component_from_bp",
        "/remove_component_from_bp",
        "Remove a component from the Blueprint.",
        &[BP_PATH, EXISTING_COMPONENT],
    ),
    post(
        "reattach_component_in_bp",
        "/reattach_component_in_bp",
        "Reparent (reattach) a component in the Blueprint.",
        &[
            BP_PATH,
            EXISTING_COMPONENT,
            ArgSpec::text(
                "attach_to",
                "AttachTo",
                "Must be a valid new parent component name (e.g., 'MyStaticMeshComp').",
            ),
        ],
    ),
    get(
        "get_component_properties",
        "/get_component_properties",
        "Get the properties of a component in the Blueprint.",
        &[
            BP_PATH_QUERY,
            ArgSpec::text(
                "component_name",
                "component_name",
                "Must be a valid existing component name (e.g., 'MyStaticMeshComp').",
            ),
        ],
    ),
    post(
        "set_component_property",
        "/set_component_property",
        "Set properties for a component in the Blueprint.",
        &[
            BP_PATH,
            EXISTING_COMPONENT,
            ArgSpec::text_map(
                "properties",
                "Properties",
                "Map of property paths to values, where values are valid strings for the property type. \
                 Paths may be dotted to reach nested fields and use a numeric segment to address array elements \
                 (e.g., {'RelativeLocation': 'X=0.5,Y=20,Z=100', 'RelativeScale3D.Z': '2.0', \
                 'OverrideMaterials.0': '/Game/M_Red.M_Red', 'StaticMesh': '/Engine/BasicShapes/Cube.Cube', \
                 'Mobility': 'Movable'}).",
            ),
        ],
    ),
];

/// Find a catalog entry by tool name.
#[must_use]
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}
